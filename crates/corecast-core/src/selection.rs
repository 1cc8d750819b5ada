use tracing::debug;

use crate::{CoreError, Platform};

/// Parse a comma-separated platform selection.
///
/// Tokens are either 1-based indices into [`Platform::ALL`] or platform
/// names (case-insensitive). Unknown and out-of-range tokens are skipped.
/// Repeated selections are kept, in order.
pub fn parse_selection(input: &str) -> Result<Vec<Platform>, CoreError> {
    let mut selected = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let platform = if token.bytes().all(|b| b.is_ascii_digit()) {
            token.parse::<usize>().ok().and_then(Platform::from_index)
        } else {
            Platform::parse_str(token)
        };

        match platform {
            Some(p) => selected.push(p),
            None => debug!("skipping unrecognised platform selection {token:?}"),
        }
    }

    if selected.is_empty() {
        return Err(CoreError::NoPlatformsSelected);
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_and_names_agree() {
        let by_index = parse_selection("1,5").unwrap();
        let by_name = parse_selection("twitter,blog").unwrap();
        assert_eq!(by_index, vec![Platform::Twitter, Platform::Blog]);
        assert_eq!(by_index, by_name);
    }

    #[test]
    fn mixed_tokens_and_whitespace() {
        let sel = parse_selection(" 2 , Slack,  TIKTOK ").unwrap();
        assert_eq!(
            sel,
            vec![Platform::Linkedin, Platform::Slack, Platform::Tiktok]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let sel = parse_selection("twitter,1").unwrap();
        assert_eq!(sel, vec![Platform::Twitter, Platform::Twitter]);
    }

    #[test]
    fn invalid_tokens_are_skipped() {
        let sel = parse_selection("0,11,myspace,3,-1").unwrap();
        assert_eq!(sel, vec![Platform::Instagram]);
    }

    #[test]
    fn nothing_valid_is_an_error() {
        assert_eq!(parse_selection(""), Err(CoreError::NoPlatformsSelected));
        assert_eq!(parse_selection("99, x"), Err(CoreError::NoPlatformsSelected));
    }
}
