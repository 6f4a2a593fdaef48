use crate::catalog::knowledge_articles;
use crate::models::KnowledgeItem;

/// Searchable offline articles.
pub struct KnowledgeBase {
    items: Vec<KnowledgeItem>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::with_items(knowledge_articles())
    }

    pub fn with_items(items: Vec<KnowledgeItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[KnowledgeItem] {
        &self.items
    }

    /// Matches on title, content or tag. An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&KnowledgeItem> {
        self.items.iter().filter(|item| item.matches(term)).collect()
    }

    /// Matches grouped by category, groups in order of first appearance.
    pub fn grouped(&self, term: &str) -> Vec<(String, Vec<&KnowledgeItem>)> {
        let mut groups: Vec<(String, Vec<&KnowledgeItem>)> = Vec::new();
        for item in self.search(term) {
            match groups.iter_mut().find(|(category, _)| *category == item.category) {
                Some((_, items)) => items.push(item),
                None => groups.push((item.category.clone(), vec![item])),
            }
        }
        groups
    }

    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}
