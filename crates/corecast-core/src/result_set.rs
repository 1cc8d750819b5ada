use crate::Platform;

/// Accepted content, one entry per platform, in first-acceptance order.
///
/// Storing a platform that already has an entry replaces its content in
/// place, so a platform selected twice keeps its original position and the
/// later acceptance wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(Platform, String)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, platform: Platform, content: String) {
        match self.entries.iter_mut().find(|(p, _)| *p == platform) {
            Some(entry) => entry.1 = content,
            None => self.entries.push((platform, content)),
        }
    }

    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, c)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn platforms(&self) -> Vec<Platform> {
        self.entries.iter().map(|(p, _)| *p).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        self.entries.iter().map(|(p, c)| (*p, c.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut rs = ResultSet::new();
        rs.insert(Platform::Blog, "b".into());
        rs.insert(Platform::Twitter, "t".into());
        assert_eq!(rs.platforms(), vec![Platform::Blog, Platform::Twitter]);
    }

    #[test]
    fn reinsert_overwrites_in_place() {
        let mut rs = ResultSet::new();
        rs.insert(Platform::Twitter, "first".into());
        rs.insert(Platform::Blog, "b".into());
        rs.insert(Platform::Twitter, "second".into());
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.get(Platform::Twitter), Some("second"));
        assert_eq!(rs.platforms(), vec![Platform::Twitter, Platform::Blog]);
    }

    #[test]
    fn empty_by_default() {
        let rs = ResultSet::default();
        assert!(rs.is_empty());
        assert_eq!(rs.get(Platform::Slack), None);
    }
}
