use std::sync::Arc;

use chrono::{TimeZone, Utc};
use websearch_summary::core::models::{Document, SummaryRequest};
use websearch_summary::errors::SummaryError;
use websearch_summary::summarize::text::query_terms;
use websearch_summary::summarize::{
    ExtractiveSummarizer, FixedClock, compose_summary, extract_key_terms, summarize_documents,
};

/// Tests for end-to-end summary composition.
/// The clock is pinned so the trailing date line is deterministic.

fn summarizer() -> ExtractiveSummarizer {
    // 12:00 on 2024-05-01 in Tokyo
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap());
    ExtractiveSummarizer::new(Arc::new(clock), chrono_tz::Asia::Tokyo)
}

fn request(query: &str, results: Vec<Document>) -> SummaryRequest {
    SummaryRequest {
        query: query.to_string(),
        results,
    }
}

#[tokio::test]
async fn test_weather_query_summary() {
    let req = request(
        "東京 天気",
        vec![Document::new(
            "東京の天気",
            "https://weather.example/tokyo",
            "今日は晴れです。明日は雨が降るでしょう。気温は20度前後です。",
        )],
    );

    let result = summarize_documents(&summarizer(), &req).await.unwrap();

    // Only the one content sentence longer than ten characters survives.
    assert_eq!(
        result.summary,
        "「東京 天気」に関する検索結果のサマリ：\n\n\
         重要なポイント:\n\
         1. 明日は雨が降るでしょう\n\n\n\n\
         この情報は2024/5/1時点での検索結果に基づいています。"
    );
    assert!(!result.summary.contains("その他の関連情報"));
    assert!(!result.summary.contains("主要キーワード"));
    assert_eq!(result.query, "東京 天気");
    assert_eq!(result.source_count, 1);
}

#[tokio::test]
async fn test_repeated_word_becomes_keyword() {
    let req = request(
        "イベント 情報",
        vec![Document::new(
            "Meetup",
            "",
            "Rustacean rustacean RUSTACEAN Rustacean が集まるイベントが開催されました。",
        )],
    );

    let result = summarize_documents(&summarizer(), &req).await.unwrap();

    assert!(
        result.summary.contains("主要キーワード: rustacean\n\n重要なポイント:"),
        "Keyword line should list the lowercased repeated word. Actual: {}",
        result.summary
    );
}

#[tokio::test]
async fn test_long_summary_is_capped_at_500_chars() {
    let content = format!("{}。", "あ".repeat(200)).repeat(6);
    let req = request("長文", vec![Document::new("長い記事", "", content)]);

    let result = summarize_documents(&summarizer(), &req).await.unwrap();

    assert_eq!(result.summary.chars().count(), 500);
    assert!(result.summary.ends_with("..."));
    assert!(result.summary.contains(&format!("1. {}...", "あ".repeat(150))));
}

#[tokio::test]
async fn test_twelve_sentences_split_into_points_and_extras() {
    let sentences: Vec<String> = (1..=12)
        .map(|i| format!("これは{i:02}番目の十分に長い文章です"))
        .collect();
    let content = sentences
        .iter()
        .map(|s| format!("{s}。"))
        .collect::<String>();
    let req = request("文章", vec![Document::new("文書", "", content)]);

    let result = summarize_documents(&summarizer(), &req).await.unwrap();
    let summary = &result.summary;

    for (i, sentence) in sentences.iter().take(5).enumerate() {
        assert!(
            summary.contains(&format!("{}. {sentence}\n", i + 1)),
            "Key point {} missing. Actual: {summary}",
            i + 1
        );
    }
    assert!(!summary.contains("6. "));

    let extras = sentences[5..10].join("。");
    assert!(summary.contains(&format!("\n\n\nその他の関連情報として、{extras}。\n\n")));
    assert!(!summary.contains(&sentences[10]));
    assert!(!summary.contains(&sentences[11]));
}

#[tokio::test]
async fn test_only_first_ten_documents_are_used() {
    let docs: Vec<Document> = (0..12)
        .map(|i| Document::new(format!("記事{i}"), "", format!("これは記事番号{i:02}の本文の内容です。")))
        .collect();
    let req = request("記事", docs);

    let result = summarize_documents(&summarizer(), &req).await.unwrap();

    // All documents are counted, but only ten contribute sentences.
    assert_eq!(result.source_count, 12);
    assert!(result.summary.contains("1. これは記事番号00の本文の内容です\n"));
    assert!(result.summary.contains("。これは記事番号09の本文の内容です。\n\n"));
}

#[tokio::test]
async fn test_short_sentences_never_become_key_points() {
    let req = request(
        "テスト",
        vec![Document::new("短", "", "短い。とても短い文。これは十一文字以上の文です。")],
    );

    let result = summarize_documents(&summarizer(), &req).await.unwrap();

    assert!(result.summary.contains("1. これは十一文字以上の文です\n"));
    assert!(!result.summary.contains("2. "));
    assert!(!result.summary.contains("とても短い文"));
}

#[tokio::test]
async fn test_identical_inputs_give_identical_summaries() {
    let docs = vec![
        Document::new("Rust", "https://a.example", "Rust rust rust は安全で高速なシステム言語です。"),
        Document::new("Go", "https://b.example", "Go は並行処理に強いプログラミング言語です。"),
    ];
    let req = request("言語 比較", docs);

    let first = summarize_documents(&summarizer(), &req).await.unwrap();
    let second = summarize_documents(&summarizer(), &req).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_date_line_follows_configured_timezone() {
    // 20:00 UTC on 30 April is already 1 May in Tokyo.
    let instant = Utc.with_ymd_and_hms(2024, 4, 30, 20, 0, 0).unwrap();
    let tokyo = ExtractiveSummarizer::new(Arc::new(FixedClock(instant)), chrono_tz::Asia::Tokyo);
    let utc = ExtractiveSummarizer::new(Arc::new(FixedClock(instant)), chrono_tz::UTC);
    let req = request("日付", vec![Document::new("t", "", "本文は十分に長い文章になっています。")]);

    let tokyo_summary = summarize_documents(&tokyo, &req).await.unwrap().summary;
    let utc_summary = summarize_documents(&utc, &req).await.unwrap().summary;

    assert!(tokyo_summary.ends_with("この情報は2024/5/1時点での検索結果に基づいています。"));
    assert!(utc_summary.ends_with("この情報は2024/4/30時点での検索結果に基づいています。"));
}

#[tokio::test]
async fn test_empty_inputs_are_rejected() {
    let empty_query = request("", vec![Document::new("t", "", "c")]);
    let no_docs = request("query", Vec::new());

    assert!(matches!(
        summarize_documents(&summarizer(), &empty_query).await,
        Err(SummaryError::InvalidInput(_))
    ));
    assert!(matches!(
        summarize_documents(&summarizer(), &no_docs).await,
        Err(SummaryError::InvalidInput(_))
    ));
}

#[test]
fn test_summary_length_bound_holds_for_varied_inputs() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    for n in [0, 1, 5, 20, 80, 400] {
        let text = "長めの文章がここに続いていきます。".repeat(n);
        let summary = compose_summary("長め", &text, date).unwrap();
        let len = summary.chars().count();
        assert!(len <= 500, "summary of {n} sentences was {len} chars");
        if len == 500 {
            assert!(summary.ends_with("..."));
        }
    }
}

#[test]
fn test_keywords_never_repeat_query_terms() {
    let query = "rust cargo 東京都";
    let text = "rust rust rust cargo cargo cargo 東京都 東京都 東京都 tokio tokio tokio";

    let terms = extract_key_terms(query, text).unwrap();
    let excluded = query_terms(query);

    assert_eq!(terms, vec!["tokio"]);
    assert!(terms.iter().all(|t| !excluded.contains(&t.as_str())));
}

#[test]
fn test_keyword_exclusion_is_case_sensitive() {
    // Known caveat: content words are lowercased but query tokens are not,
    // so a capitalised query term does not exclude its lowercase keyword.
    let terms = extract_key_terms("Tokio", "Tokio Tokio Tokio").unwrap();
    assert_eq!(terms, vec!["tokio"]);
}
