//! Output formatting utilities

use crate::domain::Rejection;

/// Format a rendered page: optional head markup, then each item in order
pub fn format_page(head: Option<&str>, items: &[String]) -> String {
    let mut output = String::new();

    if let Some(head) = head {
        output.push_str(head);
    }

    for item in items {
        output.push_str(item);
        if !item.ends_with('\n') {
            output.push('\n');
        }
    }

    output
}

/// Format rejected tags, one line each, labelled with their source
pub fn format_rejections(rejections: &[(String, Rejection)]) -> String {
    if rejections.is_empty() {
        return "No rejected tags".to_string();
    }

    let mut output = String::new();
    for (source, rejection) in rejections {
        output.push_str(&format!(
            "{}: {}: {}\n",
            source,
            rejection.full_span.replace('\n', "\\n"),
            rejection.reason
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RejectReason;

    #[test]
    fn test_format_page_without_head() {
        let items = vec!["<p>a</p>".to_string(), "<p>b</p>\n".to_string()];
        assert_eq!(format_page(None, &items), "<p>a</p>\n<p>b</p>\n");
    }

    #[test]
    fn test_format_page_with_head() {
        let items = vec!["body".to_string()];
        assert_eq!(
            format_page(Some("<script></script>\n"), &items),
            "<script></script>\nbody\n"
        );
    }

    #[test]
    fn test_format_empty_rejections() {
        assert_eq!(format_rejections(&[]), "No rejected tags");
    }

    #[test]
    fn test_format_rejections() {
        let rejections = vec![
            (
                "post.html".to_string(),
                Rejection {
                    tag_name: "youtube".to_string(),
                    full_span: "{youtube}abc{/youtube}".to_string(),
                    reason: RejectReason::MalformedVideoId,
                },
            ),
            (
                "<stdin>".to_string(),
                Rejection {
                    tag_name: "mp3".to_string(),
                    full_span: "{mp3}\na.wav{/mp3}".to_string(),
                    reason: RejectReason::WrongExtension {
                        found: "wav".to_string(),
                    },
                },
            ),
        ];

        let output = format_rejections(&rejections);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("post.html: {youtube}abc{/youtube}: video ID must be 11"));
        assert_eq!(
            lines[1],
            "<stdin>: {mp3}\\na.wav{/mp3}: extension 'wav' is not mp3"
        );
    }
}
