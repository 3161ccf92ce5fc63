use crate::models::Favorite;

/// Server-provided name when present, else `"<TYPE> - <id>"`.
pub fn favorite_display_name(favorite: &Favorite) -> String {
    match &favorite.item_name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => format!("{} - {}", favorite.kind.to_uppercase(), favorite.item_id),
    }
}
