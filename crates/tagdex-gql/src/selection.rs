//! Extraction of the requested field shape from the GraphQL context.

use async_graphql::{Context, SelectionField};
use tagdex_graph::{SelectedField, Selection};

/// The selection under the field currently being resolved.
///
/// Introspection fields (`__typename` and friends) are handled by the
/// engine itself and skipped here, so the translator never sees them.
pub fn current_selection(ctx: &Context<'_>) -> Selection {
    Selection {
        fields: ctx
            .field()
            .selection_set()
            .filter(|field| !field.name().starts_with("__"))
            .map(walk)
            .collect(),
    }
}

fn walk(field: SelectionField<'_>) -> SelectedField {
    SelectedField {
        name: field.name().to_string(),
        children: Selection {
            fields: field
                .selection_set()
                .filter(|child| !child.name().starts_with("__"))
                .map(walk)
                .collect(),
        },
    }
}
