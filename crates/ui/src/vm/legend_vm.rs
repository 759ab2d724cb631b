use sentencify_core::model::PartCategory;

/// CSS classes for a word chip of the given category.
#[must_use]
pub fn part_class(category: PartCategory) -> &'static str {
    match category {
        PartCategory::Subject => "sentence-part sentence-part--subject",
        PartCategory::Verb => "sentence-part sentence-part--verb",
        PartCategory::Object => "sentence-part sentence-part--object",
        PartCategory::Complement => "sentence-part sentence-part--complement",
        PartCategory::Conjunction => "sentence-part sentence-part--conjunction",
    }
}

/// One swatch of the category color legend on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntryVm {
    pub label: &'static str,
    pub class: &'static str,
}

#[must_use]
pub fn legend_entries() -> Vec<LegendEntryVm> {
    PartCategory::ALL
        .into_iter()
        .map(|category| LegendEntryVm {
            label: category.plural_label(),
            class: part_class(category),
        })
        .collect()
}
