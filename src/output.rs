use matchnote_base::Point;
use matchnote_parser::SpannedToken;
use serde::Serialize;

/// Render points as an aligned table, one row per point.
/// Absent optional fields are shown as `-`.
pub fn generate_text(points: &[Point]) -> String {
    let mut output: String = String::new();
    output.push_str(&format!("{:>4}  {:<6} {:<7} {:<10} {}\n", "#", "PLAYER", "OUTCOME", "SHOT", "LOCATION"));
    for (idx, p) in points.iter().enumerate() {
        let shot = p.shot.map(|s| s.as_str()).unwrap_or("-");
        let location = p.location.map(|l| l.as_str()).unwrap_or("-");
        output.push_str(&format!("{:>4}  {:<6} {:<7} {:<10} {}\n", idx + 1, p.player.as_str(), p.outcome.as_str(), shot, location));
    }
    output.push_str(&format!("{} point(s)\n", points.len()));
    output
}

pub fn generate_json(points: &[Point]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(points)
}

#[derive(Serialize)]
struct TokenEntry {
    token: String,
    start: usize,
    end: usize,
}

pub fn generate_tokens_text(tokens: &[SpannedToken]) -> String {
    tokens.iter()
        .map(|t| format!("{}..{}\t{}\n", t.span.start, t.span.end, t.tok))
        .collect()
}

pub fn generate_tokens_json(tokens: &[SpannedToken]) -> serde_json::Result<String> {
    let entries: Vec<TokenEntry> = tokens.iter()
        .map(|t| TokenEntry { token: t.tok.to_string(), start: t.span.start, end: t.span.end })
        .collect();
    serde_json::to_string_pretty(&entries)
}

#[cfg(test)]
mod tests {
    use matchnote_base::{Location, Outcome, Player, Point, Shot};
    use serde_json::json;

    #[test]
    fn test_generate_text() {
        let points = vec![
            Point::new(Player::P1, Outcome::Ace, None, None),
            Point::new(Player::P2, Outcome::Winner, Some(Shot::Forehand), Some(Location::Wide)),
        ];
        let text = super::generate_text(&points);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "   1  P1     ACE     -          -");
        assert_eq!(lines[2], "   2  P2     WINNER  forehand   wide");
        assert_eq!(lines[3], "2 point(s)");
    }

    #[test]
    fn test_generate_json() {
        let points = vec![Point::new(Player::P1, Outcome::Error, Some(Shot::Lob), None)];
        let s = super::generate_json(&points).unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v, json!([{ "player": "P1", "outcome": "ERROR", "shot": "lob", "location": null }]));
    }

    #[test]
    fn test_generate_tokens() {
        let tokens = matchnote_parser::tokenize("P1 ACE\n");
        assert_eq!(super::generate_tokens_text(&tokens), "0..2\tplayer `P1`\n3..6\toutcome `ACE`\n6..7\tnewline\n");
        let v: serde_json::Value = serde_json::from_str(&super::generate_tokens_json(&tokens).unwrap()).unwrap();
        assert_eq!(v[1], json!({ "token": "outcome `ACE`", "start": 3, "end": 6 }));
    }
}
