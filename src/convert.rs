//! Pure converters between wire models and the entity.

use crate::entity::TranslationItem;
use crate::gateway::model::{CreateItemRequestBody, Item, UpdateItemRequestBody};

/// Id is left zero for the store to assign.
pub fn item_from_create_request(body: &CreateItemRequestBody) -> TranslationItem {
    TranslationItem {
        id: 0,
        word: body.word.clone(),
        translation: body.translation.clone(),
    }
}

/// The path id is the authoritative identity source for mutations; the body
/// carries only the mutable fields.
pub fn item_from_update_request(id: i64, body: &UpdateItemRequestBody) -> TranslationItem {
    TranslationItem {
        id,
        word: body.word.clone(),
        translation: body.translation.clone(),
    }
}

pub fn item_to_wire(item: &TranslationItem) -> Item {
    Item {
        id: item.id,
        word: item.word.clone(),
        translation: item.translation.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_leaves_id_zero() {
        let body = CreateItemRequestBody {
            word: "cat".into(),
            translation: "кот".into(),
        };
        let item = item_from_create_request(&body);
        assert_eq!(item.id, 0);
        assert_eq!(item.word, "cat");
        assert_eq!(item.translation, "кот");
    }

    #[test]
    fn update_request_takes_id_from_path() {
        let body = UpdateItemRequestBody {
            word: "dog".into(),
            translation: "собака".into(),
        };
        let item = item_from_update_request(7, &body);
        assert_eq!(item.id, 7);
        assert_eq!(item.word, "dog");
        assert_eq!(item.translation, "собака");
    }

    #[test]
    fn wire_item_mirrors_entity() {
        let entity = TranslationItem {
            id: 3,
            word: "sun".into(),
            translation: "солнце".into(),
        };
        let wire = item_to_wire(&entity);
        assert_eq!(wire.id, 3);
        assert_eq!(wire.word, "sun");
        assert_eq!(wire.translation, "солнце");
    }
}
