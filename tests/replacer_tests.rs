//! Library-level tests for tag replacement on realistic article content

use mediatag::domain::{AssetPaths, RejectReason, TagReplacer};
use tempfile::TempDir;

mod common;
use common::write_mp3;

const ORIGIN: &str = "https://example.com/";

fn site() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_mp3(temp.path(), "music/song.mp3");
    write_mp3(temp.path(), "music/song.wav");
    temp
}

#[test]
fn test_article_with_mixed_content() {
    let site = site();
    let replacer = TagReplacer::new(site.path(), AssetPaths::default());
    let article = "<h1>Episode 12</h1>\n\
                   <p>Listen:</p>\n\
                   {mp3}music/song.mp3{/mp3}\n\
                   <p>Or watch:</p>\n\
                   {YouTube}dQw4w9WgXcQ{/YouTube}\n\
                   <p>Bonus (broken): {mp3}music/song.wav{/mp3}</p>\n";

    let out = replacer.process(article, ORIGIN);

    assert!(out.text.starts_with("<h1>Episode 12</h1>\n<p>Listen:</p>\n<audio controls"));
    assert_eq!(out.text.matches("<audio").count(), 1);
    assert_eq!(out.text.matches("<iframe").count(), 1);
    assert!(out.text.contains("<p>Bonus (broken): {mp3}music/song.wav{/mp3}</p>"));
    assert!(out.assets_needed());
    assert_eq!(out.rejections.len(), 1);
    assert_eq!(
        out.rejections[0].reason,
        RejectReason::WrongExtension {
            found: "wav".to_string()
        }
    );
}

#[test]
fn test_reprocessing_output_is_noop() {
    let site = site();
    let replacer = TagReplacer::new(site.path(), AssetPaths::default());
    let first = replacer.process(
        "{mp3}music/song.mp3{/mp3}{youtube}dQw4w9WgXcQ{/youtube}",
        ORIGIN,
    );
    let second = replacer.process(&first.text, ORIGIN);

    assert_eq!(second.text, first.text);
    assert!(!second.assets_needed());
    assert!(second.rejections.is_empty());
}

#[test]
fn test_duplicate_spans_replaced_together() {
    let site = site();
    let replacer = TagReplacer::new(site.path(), AssetPaths::default());
    let out = replacer.process(
        "{mp3}music/song.mp3{/mp3} then again {mp3}music/song.mp3{/mp3}",
        ORIGIN,
    );

    assert_eq!(out.text.matches("src=\"music/song.mp3\"").count(), 2);
    assert!(!out.text.contains("{mp3}"));
}

#[test]
fn test_replacer_is_shareable_across_threads() {
    let site = site();
    let replacer = std::sync::Arc::new(TagReplacer::new(site.path(), AssetPaths::default()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let replacer = replacer.clone();
            std::thread::spawn(move || {
                let origin = format!("https://site{}.example/", i);
                let out = replacer.process("{youtube}dQw4w9WgXcQ{/youtube}", &origin);
                (origin, out.text)
            })
        })
        .collect();

    for handle in handles {
        let (origin, text) = handle.join().unwrap();
        assert!(text.contains(&format!("origin={}\"", origin)));
    }
}
