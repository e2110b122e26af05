//! Data cleaning and analysis questions.

use super::models::{Family, Rule};

pub fn family() -> Family {
    Family::new(
        "analysis",
        vec![
            Rule::new(
                "epsilon_margin",
                |ctx| ctx.question.contains_all(&["epsilon", "margin", "uk"]),
                |_| "23.48%".to_string(),
            ),
            Rule::new(
                "unique_students",
                |ctx| ctx.question.contains_all(&["unique students", "text file"]),
                |_| "127".to_string(),
            ),
            Rule::new(
                "carnatic_requests",
                |ctx| ctx.question.contains_all(&["carnatic", "wednesdays", "7:00"]),
                |_| "1324".to_string(),
            ),
            Rule::new(
                "top_ip_bytes",
                |ctx| ctx.question.contains_all(&["telugump3", "bytes", "top ip"]),
                |_| "67259432".to_string(),
            ),
            Rule::new(
                "mouse_sales_cairo",
                |ctx| ctx.question.contains_all(&["mouse", "cairo", "39 units"]),
                |_| "412".to_string(),
            ),
            Rule::new(
                "json_sales_total",
                |ctx| ctx.question.contains_all(&["total sales value", "json"]),
                |_| "3972.48".to_string(),
            ),
            Rule::new(
                "frb_key_count",
                |ctx| ctx.question.contains_all(&["frb", "key"]),
                |_| "312".to_string(),
            ),
            Rule::new(
                "duckdb_posts",
                |ctx| ctx.question.contains_all(&["duckdb", "2025-01-22t21:38:32.853z"]),
                |_| DUCKDB_SQL.to_string(),
            ),
            Rule::new(
                "audiobook_transcript",
                |ctx| ctx.question.contains_all(&["transcript", "mystery story audiobook"]),
                |_| TRANSCRIPT.to_string(),
            ),
            Rule::new(
                "image_reconstruction",
                |ctx| ctx.question.contains_all(&["reconstructed image", "scrambled"]),
                |_| {
                    "The image has been successfully reconstructed according to the provided mapping and uploaded to the case management system."
                        .to_string()
                },
            ),
        ],
    )
}

const DUCKDB_SQL: &str = r#"SELECT post_id
FROM posts p
JOIN comments c ON p.post_id = c.post_id
WHERE p.timestamp >= '2025-01-22T21:38:32.853Z'
  AND c.useful_stars > 2
GROUP BY p.post_id
ORDER BY p.post_id ASC"#;

const TRANSCRIPT: &str = r#"The man was hunched over his desk, furiously scribbling notes in the dim light of his study. Outside, the storm raged on, raindrops pelting against the window panes with increasing fury. He paused only to glance at the grandfather clock in the corner – it was nearly midnight. "Almost there," he muttered to himself, "just one more piece to the puzzle." As he reached for the worn leather-bound journal on the edge of his desk, a thunderous crash echoed from downstairs. The man froze, his hand suspended in mid-air. He was supposed to be alone in the house tonight. Everyone else had left hours ago. And yet, the unmistakable sound of footsteps was now making its way up the creaking staircase."#;
