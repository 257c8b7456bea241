//! Selection-set queries shared by rules.

use apollo_parser::cst;
use graphql_schema::TypeDescriptor;

/// Whether `field_name` is selected directly in `selection_set`.
///
/// Inline fragments are followed one level deep; an inline fragment nested
/// inside another inline fragment is not. Fragment spreads never count, since
/// the spread's definition is not consulted. A missing selection set selects
/// nothing.
#[must_use]
pub fn was_field_requested(selection_set: Option<&cst::SelectionSet>, field_name: &str) -> bool {
    selection_set.is_some_and(|set| requested_in(set, field_name, false))
}

fn requested_in(set: &cst::SelectionSet, field_name: &str, nested: bool) -> bool {
    set.selections().any(|selection| match selection {
        cst::Selection::Field(field) => field
            .name()
            .is_some_and(|name| name.text().as_str() == field_name),
        cst::Selection::InlineFragment(inline) => {
            !nested
                && inline
                    .selection_set()
                    .is_some_and(|inner| requested_in(&inner, field_name, true))
        }
        cst::Selection::FragmentSpread(_) => false,
    })
}

/// Whether a field named `field_name` exists on `ty`, looking through list
/// and non-null wrappers.
#[must_use]
pub fn is_field_available(ty: Option<&TypeDescriptor<'_>>, field_name: &str) -> bool {
    let Some(ty) = ty else {
        return false;
    };
    if ty
        .field_map()
        .is_some_and(|fields| fields.contains_key(field_name))
    {
        return true;
    }
    is_field_available(ty.of_type(), field_name)
}
