use std::fmt;

use serde::{Deserialize, Serialize};

/// The eight expression/eye-state combinations an emoji can represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiCategory {
    Smile,
    Frown,
    LeftWinkSmile,
    RightWinkSmile,
    LeftWinkFrown,
    RightWinkFrown,
    EyesClosedSmile,
    EyesClosedFrown,
}

impl EmojiCategory {
    pub const ALL: [EmojiCategory; 8] = [
        EmojiCategory::Smile,
        EmojiCategory::Frown,
        EmojiCategory::LeftWinkSmile,
        EmojiCategory::RightWinkSmile,
        EmojiCategory::LeftWinkFrown,
        EmojiCategory::RightWinkFrown,
        EmojiCategory::EyesClosedSmile,
        EmojiCategory::EyesClosedFrown,
    ];

    /// Position in [`EmojiCategory::ALL`].
    pub fn index(self) -> usize {
        match self {
            EmojiCategory::Smile => 0,
            EmojiCategory::Frown => 1,
            EmojiCategory::LeftWinkSmile => 2,
            EmojiCategory::RightWinkSmile => 3,
            EmojiCategory::LeftWinkFrown => 4,
            EmojiCategory::RightWinkFrown => 5,
            EmojiCategory::EyesClosedSmile => 6,
            EmojiCategory::EyesClosedFrown => 7,
        }
    }

    /// File stem of the bundled graphic for this category.
    pub fn asset_name(self) -> &'static str {
        match self {
            EmojiCategory::Smile => "smile",
            EmojiCategory::Frown => "frown",
            EmojiCategory::LeftWinkSmile => "leftwink",
            EmojiCategory::RightWinkSmile => "rightwink",
            EmojiCategory::LeftWinkFrown => "leftwinkfrown",
            EmojiCategory::RightWinkFrown => "rightwinkfrown",
            EmojiCategory::EyesClosedSmile => "closed_smile",
            EmojiCategory::EyesClosedFrown => "closed_frown",
        }
    }

    pub fn is_smiling(self) -> bool {
        matches!(
            self,
            EmojiCategory::Smile
                | EmojiCategory::LeftWinkSmile
                | EmojiCategory::RightWinkSmile
                | EmojiCategory::EyesClosedSmile
        )
    }

    pub fn left_eye_closed(self) -> bool {
        matches!(
            self,
            EmojiCategory::LeftWinkSmile
                | EmojiCategory::LeftWinkFrown
                | EmojiCategory::EyesClosedSmile
                | EmojiCategory::EyesClosedFrown
        )
    }

    pub fn right_eye_closed(self) -> bool {
        matches!(
            self,
            EmojiCategory::RightWinkSmile
                | EmojiCategory::RightWinkFrown
                | EmojiCategory::EyesClosedSmile
                | EmojiCategory::EyesClosedFrown
        )
    }
}

impl fmt::Display for EmojiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmojiCategory::Smile => "smile",
            EmojiCategory::Frown => "frown",
            EmojiCategory::LeftWinkSmile => "left_wink_smile",
            EmojiCategory::RightWinkSmile => "right_wink_smile",
            EmojiCategory::LeftWinkFrown => "left_wink_frown",
            EmojiCategory::RightWinkFrown => "right_wink_frown",
            EmojiCategory::EyesClosedSmile => "eyes_closed_smile",
            EmojiCategory::EyesClosedFrown => "eyes_closed_frown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_index_matches_position_in_all() {
        for (i, category) in EmojiCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_asset_names_are_unique() {
        let names: HashSet<_> = EmojiCategory::ALL.iter().map(|c| c.asset_name()).collect();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_display_matches_serde_name() {
        for category in EmojiCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn test_eye_flags_distinguish_every_category() {
        let signatures: HashSet<_> = EmojiCategory::ALL
            .iter()
            .map(|c| (c.is_smiling(), c.left_eye_closed(), c.right_eye_closed()))
            .collect();
        assert_eq!(signatures.len(), 8);
    }
}
