use crate::ElementId;
use crc32fast::Hasher;

/// Generate a project seed from a project name or path using CRC32
pub fn get_project_seed(source: &str) -> String {
    let mut buff = String::from(source);
    if !source.starts_with("weave://") {
        buff = format!("weave://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for elements within a project
///
/// Ids look like `<seed>-<n>`. The counter never goes backwards, so an id is
/// never handed out twice by the same generator. After loading a saved
/// project call [`IdGenerator::observe`] on every existing id so new ids
/// continue past them.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u64,
}

impl IdGenerator {
    pub fn new(source: &str) -> Self {
        Self {
            seed: get_project_seed(source),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential raw id (pages, animations, interactions)
    pub fn next_raw(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Generate next element id
    pub fn new_id(&mut self) -> ElementId {
        ElementId::new(self.next_raw())
    }

    /// Advance the counter past `id` if it was produced with this seed
    pub fn observe(&mut self, id: &str) {
        let Some(suffix) = id
            .strip_prefix(self.seed.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            return;
        };

        if let Ok(n) = suffix.parse::<u64>() {
            self.count = self.count.max(n);
        }
    }

    /// Get project seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_seed_generation() {
        let id1 = get_project_seed("landing-page");
        let id2 = get_project_seed("landing-page");
        assert_eq!(id1, id2);

        let id3 = get_project_seed("shop");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("test");

        let id1 = gen.new_id();
        let id2 = gen.new_id();

        assert!(id1.as_str().ends_with("-1"));
        assert!(id2.as_str().ends_with("-2"));
        assert!(id1.as_str().starts_with(gen.seed()));
    }

    #[test]
    fn test_observe_skips_existing_ids() {
        let mut gen = IdGenerator::new("test");
        let seed = gen.seed().to_string();

        gen.observe(&format!("{}-41", seed));
        gen.observe("someone-else-900");
        gen.observe(&format!("{}-3", seed));

        assert_eq!(gen.new_id().as_str(), format!("{}-42", seed));
    }
}
