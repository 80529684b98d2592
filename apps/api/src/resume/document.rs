//! Document model builder.
//!
//! Maps the static biography records into an ordered, structured document
//! tree (sections → content items) for the sections the user selected.
//! Building is a pure transformation: the data store is total over the key
//! set, so there is no missing-record error path, and no timestamps are
//! embedded here (delivery owns the date).

use crate::biography;
use crate::resume::section::{SectionKey, SelectionState};

/// One styled run of content inside a section, tagged with its visual role.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    /// Bold lead line of an entry (degree, job title, project name, ...).
    ItemTitle(String),
    /// Muted qualifier line under a title ("organization | date range").
    ItemSubtitle(String),
    /// Body text: an achievement bullet or a free-form description.
    Description(String),
    /// A row of short skill tokens rendered as chips.
    SkillChips(Vec<String>),
}

/// One rendered section: heading plus its content items in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBlock {
    pub key: SectionKey,
    pub title: &'static str,
    pub items: Vec<ContentItem>,
}

/// The full document tree handed to the renderer. Rebuilt from scratch on
/// every render request; never mutated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentModel {
    pub blocks: Vec<SectionBlock>,
}

/// Builds the document model for a selection. Sections appear in canonical
/// order independent of how the selection was reached; an empty selection
/// yields an empty model.
pub fn build(selection: &SelectionState) -> DocumentModel {
    let blocks = selection.iter().map(build_block).collect();
    DocumentModel { blocks }
}

fn build_block(key: SectionKey) -> SectionBlock {
    let items = match key {
        SectionKey::Education => education_items(),
        SectionKey::Experience => experience_items(),
        SectionKey::Projects => project_items(),
        SectionKey::Publications => publication_items(),
        SectionKey::Skills => skill_items(),
    };
    SectionBlock {
        key,
        title: key.label(),
        items,
    }
}

fn education_items() -> Vec<ContentItem> {
    biography::EDUCATION
        .iter()
        .flat_map(|record| {
            [
                ContentItem::ItemTitle(record.degree.to_string()),
                ContentItem::ItemSubtitle(format!(
                    "{} | {}",
                    record.institution, record.date_range
                )),
            ]
        })
        .collect()
}

fn experience_items() -> Vec<ContentItem> {
    let mut items = Vec::new();
    for record in biography::EXPERIENCE {
        items.push(ContentItem::ItemTitle(record.title.to_string()));
        items.push(ContentItem::ItemSubtitle(format!(
            "{} | {}",
            record.organization, record.date_range
        )));
        for achievement in record.achievements {
            items.push(ContentItem::Description((*achievement).to_string()));
        }
    }
    items
}

fn project_items() -> Vec<ContentItem> {
    let mut items = Vec::new();
    for record in biography::PROJECTS {
        items.push(ContentItem::ItemTitle(record.name.to_string()));
        items.push(ContentItem::Description(record.description.to_string()));
    }
    items
}

fn publication_items() -> Vec<ContentItem> {
    let mut items = Vec::new();
    for record in biography::PUBLICATIONS {
        items.push(ContentItem::ItemTitle(record.title.to_string()));
        items.push(ContentItem::ItemSubtitle(format!(
            "{} | {}",
            record.venue, record.year
        )));
        items.push(ContentItem::Description(format!("DOI: {}", record.doi)));
    }
    items
}

fn skill_items() -> Vec<ContentItem> {
    let mut items = Vec::new();
    for group in biography::SKILLS {
        items.push(ContentItem::ItemTitle(format!("{}:", group.category)));
        items.push(ContentItem::SkillChips(
            group.skills.iter().map(|s| (*s).to_string()).collect(),
        ));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_full_selection_has_five_blocks_in_canonical_order() {
        let model = build(&SelectionState::default());
        let keys: Vec<SectionKey> = model.blocks.iter().map(|b| b.key).collect();
        assert_eq!(keys, SectionKey::ALL.to_vec());
    }

    #[test]
    fn test_build_empty_selection_yields_empty_model() {
        let model = build(&SelectionState::empty());
        assert!(model.blocks.is_empty());
    }

    #[test]
    fn test_block_count_matches_selection_size_for_all_subsets() {
        // Enumerate all 32 subsets via a bitmask over the canonical keys.
        for mask in 0u32..32 {
            let keys: Vec<SectionKey> = SectionKey::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, k)| k)
                .collect();
            let selection = SelectionState::from_keys(&keys);
            let model = build(&selection);
            assert_eq!(model.blocks.len(), keys.len(), "mask {mask:#b}");
            // Each block keyed to a distinct selected member, in order.
            let block_keys: Vec<SectionKey> = model.blocks.iter().map(|b| b.key).collect();
            assert_eq!(block_keys, keys);
        }
    }

    #[test]
    fn test_order_is_canonical_regardless_of_toggle_order() {
        let mut a = SelectionState::empty();
        a.toggle(SectionKey::Skills);
        a.toggle(SectionKey::Education);

        let mut b = SelectionState::empty();
        b.toggle(SectionKey::Education);
        b.toggle(SectionKey::Skills);

        assert_eq!(build(&a), build(&b));
        assert_eq!(build(&a).blocks[0].key, SectionKey::Education);
    }

    #[test]
    fn test_experience_subtitle_joins_organization_and_dates() {
        let model = build(&SelectionState::from_keys(&[SectionKey::Experience]));
        let block = &model.blocks[0];
        assert_eq!(block.title, "Professional Experience");
        assert!(block.items.iter().any(|item| matches!(
            item,
            ContentItem::ItemSubtitle(s) if s == "Connected Value Health Solutions | Jan 2025 - Present"
        )));
        // One description per achievement string.
        let descriptions = block
            .items
            .iter()
            .filter(|i| matches!(i, ContentItem::Description(_)))
            .count();
        let achievements: usize = crate::biography::EXPERIENCE
            .iter()
            .map(|r| r.achievements.len())
            .sum();
        assert_eq!(descriptions, achievements);
    }

    #[test]
    fn test_publication_block_carries_doi() {
        let model = build(&SelectionState::from_keys(&[SectionKey::Publications]));
        assert!(model.blocks[0].items.iter().any(|item| matches!(
            item,
            ContentItem::Description(s) if s.starts_with("DOI: 10.1109/")
        )));
    }

    #[test]
    fn test_skill_blocks_emit_chip_rows_per_category() {
        let model = build(&SelectionState::from_keys(&[SectionKey::Skills]));
        let chip_rows = model.blocks[0]
            .items
            .iter()
            .filter(|i| matches!(i, ContentItem::SkillChips(_)))
            .count();
        assert_eq!(chip_rows, crate::biography::SKILLS.len());
    }

    #[test]
    fn test_build_is_deterministic() {
        let selection = SelectionState::default();
        assert_eq!(build(&selection), build(&selection));
    }
}
