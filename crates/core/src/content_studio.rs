//! Mocked script generation for the content studio.

/// Tone used when the caller does not supply one.
pub const DEFAULT_TONE: &str = "engaging";

/// Default artificial latency before a generated script is returned.
pub const DEFAULT_GENERATION_DELAY_MS: u64 = 1500;

/// Render the canned video script for a topic.
///
/// A blank tone falls back to [`DEFAULT_TONE`].
pub fn generate_mock_script(topic: &str, tone: Option<&str>) -> String {
    let tone = tone
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TONE);

    format!(
        "\n**Title:** The Ultimate Guide to {topic}\n\
         \n**Scene:** A bright, modern studio. An energetic host, JANE, stands by a digital whiteboard.\n\
         \n**(Intro Music Fades)**\n\
         \n**Jane:** Hey everyone, and welcome back to GOAT Media! Today, we're diving deep into something I know you've been asking about: **{topic}**. Whether you're a beginner or a seasoned pro, you're in the right place.\n\
         \n**(Scene: Close-up on Jane, with a friendly, {tone} tone)**\n\
         \n**Jane:** First things first, let's break down what {topic} really means. It's not just a buzzword; it's a powerful strategy that can transform your brand. We'll cover the three key pillars...\n\
         \n**(Scene: Graphics appear on the whiteboard next to Jane)**\n\
         \n**Jane:** ...strategy, execution, and analysis. Get these right, and you're golden. Stick around, because by the end of this video, you'll have a clear, actionable plan.\n\
         \n**(Outro Music Begins)**\n\
         \n**Jane:** That's all for today! Don't forget to like, subscribe, and hit that notification bell so you don't miss our next video. Stay creative!\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_appears_in_title_and_body() {
        let script = generate_mock_script("Short-form video", Some("playful"));
        assert!(script.contains("**Title:** The Ultimate Guide to Short-form video"));
        assert!(script.contains("**Short-form video**"));
        assert!(script.contains("friendly, playful tone"));
    }

    #[test]
    fn missing_or_blank_tone_uses_default() {
        assert!(generate_mock_script("SEO", None).contains("friendly, engaging tone"));
        assert!(generate_mock_script("SEO", Some("  ")).contains("friendly, engaging tone"));
    }
}
