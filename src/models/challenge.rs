use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeFile {
    pub name: String,
    pub url: String,
}

/// A single challenge as handed out by the data source. Never mutated locally.
///
/// `points` is signed so penalty or zeroed challenges still decode; scoring
/// servers only hand out whole points, so fractional values are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub author: String,
    pub points: i64,
    #[serde(default)]
    pub solves: u32,
    #[serde(default)]
    pub files: Vec<ChallengeFile>,
    #[serde(default)]
    pub dynamic: Option<String>,
}

#[cfg(test)]
impl Challenge {
    pub fn sample(id: &str, category: &str, points: i64, solves: u32) -> Self {
        Self {
            id: id.to_string(),
            name: format!("chall-{}", id),
            description: String::new(),
            category: category.to_string(),
            author: "tester".to_string(),
            points,
            solves,
            files: Vec::new(),
            dynamic: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "id": "1",
            "name": "sanity-check",
            "description": "I get to write the sanity check challenge! Alright!",
            "category": "misc",
            "author": "minpeter",
            "files": [{"name": "flag.txt", "url": "https://files.example/flag.txt"}],
            "points": 485,
            "solves": 1,
            "dynamic": "web"
        }"#;
        let chall: Challenge = serde_json::from_str(json).unwrap();
        assert_eq!(chall.id, "1");
        assert_eq!(chall.category, "misc");
        assert_eq!(chall.points, 485);
        assert_eq!(chall.files[0].name, "flag.txt");
        assert_eq!(chall.dynamic.as_deref(), Some("web"));
    }

    #[test]
    fn test_negative_points_decode() {
        let json = r#"[
            {"id": "1", "name": "penalty", "category": "misc", "points": -50},
            {"id": "2", "name": "warmup", "category": "misc", "points": 0}
        ]"#;
        let challs: Vec<Challenge> = serde_json::from_str(json).unwrap();
        assert_eq!(challs[0].points, -50);
        assert_eq!(challs[1].points, 0);
    }

    #[test]
    fn test_fractional_points_rejected() {
        let json = r#"{"id": "1", "name": "x", "category": "misc", "points": 100.5}"#;
        assert!(serde_json::from_str::<Challenge>(json).is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id": "2", "name": "rev1", "category": "rev", "points": 100}"#;
        let chall: Challenge = serde_json::from_str(json).unwrap();
        assert_eq!(chall.solves, 0);
        assert!(chall.files.is_empty());
        assert_eq!(chall.dynamic, None);
        assert_eq!(chall.author, "");
    }
}
