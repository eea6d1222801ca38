//! Linked-record resolution.
//!
//! Characters reference items, spells, attacks and other characters by id.
//! Records can be deleted independently, so resolution drops dangling ids
//! silently (with a log line) and aggregation proceeds over what remains.

use cardstock_domain::{collect_fixed, Character, FixedBonuses, Item, Spell};

use crate::infrastructure::ports::StoreError;
use crate::repositories::{ItemRecords, SpellRecords};

pub async fn resolve_items(
    records: &ItemRecords,
    character: &Character,
) -> Result<Vec<Item>, StoreError> {
    let mut items = Vec::with_capacity(character.items.len());
    for id in &character.items {
        match records.get(id).await? {
            Some(item) => items.push(item),
            None => tracing::debug!(%id, "dropping dangling item reference"),
        }
    }
    Ok(items)
}

pub async fn resolve_spells(
    records: &SpellRecords,
    character: &Character,
) -> Result<Vec<Spell>, StoreError> {
    let mut spells = Vec::with_capacity(character.spells.len());
    for id in &character.spells {
        match records.get(id).await? {
            Some(spell) => spells.push(spell),
            None => tracing::debug!(%id, "dropping dangling spell reference"),
        }
    }
    Ok(spells)
}

/// Fixed bonuses from every resolvable linked source.
pub async fn fixed_bonuses_for(
    character: &Character,
    items: &ItemRecords,
    spells: &SpellRecords,
) -> Result<FixedBonuses, StoreError> {
    let items = resolve_items(items, character).await?;
    let spells = resolve_spells(spells, character).await?;
    Ok(collect_fixed(
        items
            .iter()
            .map(Into::into)
            .chain(spells.iter().map(Into::into)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use cardstock_domain::{Augment, StatKey};

    use crate::infrastructure::MemoryStore;
    use crate::repositories::Records;

    #[tokio::test]
    async fn dangling_references_are_dropped_not_fatal() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let store = Arc::new(MemoryStore::new());
        let items: ItemRecords = Records::new(store);

        let kept = Item::new("Espada").with_augments(vec![Augment::fixed("forca", 2)]);
        items.save(&kept).await.expect("save");

        let mut character = Character::new("Yana");
        character.items = vec![kept.id, cardstock_domain::ItemId::new()];

        let resolved = resolve_items(&items, &character).await.expect("resolve");
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Espada");
    }

    #[tokio::test]
    async fn fixed_bonuses_combine_items_and_spells() {
        let store = Arc::new(MemoryStore::new());
        let items: ItemRecords = Records::new(Arc::clone(&store) as _);
        let spells: SpellRecords = Records::new(store);

        let sword = Item::new("Espada").with_augments(vec![Augment::fixed("forca", 2)]);
        let blessing = Spell::new("Bênção").with_augments(vec![Augment::fixed("forca", 1)]);
        items.save(&sword).await.expect("save");
        spells.save(&blessing).await.expect("save");

        let mut character = Character::new("Yana");
        character.items = vec![sword.id];
        character.spells = vec![blessing.id];

        let fixed = fixed_bonuses_for(&character, &items, &spells)
            .await
            .expect("collect");
        assert_eq!(fixed.stat(StatKey::Strength), 3);
    }
}
