//! Media archive export.
//!
//! Collects every raw image in the store into one ZIP: a folder per record
//! kind, file names sanitized from the record names, grimoire pages
//! numbered in order. Records without images are skipped.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use cardstock_domain::ImageData;

use super::error::ExportError;
use crate::repositories::{
    AttackRecords, CharacterRecords, GrimoireRecords, ItemRecords, SpellRecords,
};

pub struct ExportMediaArchive {
    characters: CharacterRecords,
    spells: SpellRecords,
    items: ItemRecords,
    attacks: AttackRecords,
    grimoires: GrimoireRecords,
}

impl ExportMediaArchive {
    pub fn new(
        characters: CharacterRecords,
        spells: SpellRecords,
        items: ItemRecords,
        attacks: AttackRecords,
        grimoires: GrimoireRecords,
    ) -> Self {
        Self {
            characters,
            spells,
            items,
            attacks,
            grimoires,
        }
    }

    /// Build the archive and return its bytes.
    pub async fn execute(&self) -> Result<Vec<u8>, ExportError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for character in self.characters.list().await? {
            let name = safe_name(&character.title, "personagem");
            if let Some(image) = &character.image {
                add_image(&mut writer, "imagens_personagens", &name, "imagem", image)?;
            }
            if let Some(image) = &character.background_image {
                add_image(&mut writer, "imagens_personagens", &name, "fundo", image)?;
            }
        }

        for spell in self.spells.list().await? {
            if let Some(image) = &spell.image {
                let name = safe_name(&spell.name, "magia");
                add_image(&mut writer, "imagens_magias_habilidades", &name, "imagem", image)?;
            }
        }

        for item in self.items.list().await? {
            if let Some(image) = &item.image {
                let name = safe_name(&item.name, "item");
                add_image(&mut writer, "imagens_itens", &name, "imagem", image)?;
            }
        }

        for attack in self.attacks.list().await? {
            if let Some(image) = &attack.image {
                let name = safe_name(&attack.name, "ataque");
                add_image(&mut writer, "imagens_ataques", &name, "imagem", image)?;
            }
        }

        for grimoire in self.grimoires.list().await? {
            let folder = format!(
                "imagens_grimorios/{}",
                join_non_empty(
                    &safe_name(&grimoire.title, "grimorio"),
                    &safe_name(&grimoire.vol, ""),
                )
            );
            for (index, entry) in grimoire.entries.iter().enumerate() {
                if let Some(image) = &entry.image {
                    let subtitle = safe_name(&entry.subtitle, "sem_subtitulo");
                    let file = format!(
                        "{folder}/pagina_{:02}_{subtitle}.{}",
                        index + 1,
                        image.extension()
                    );
                    writer.start_file(file, SimpleFileOptions::default())?;
                    writer.write_all(&image.data)?;
                }
            }
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}

fn add_image(
    writer: &mut ZipWriter<Cursor<Vec<u8>>>,
    folder: &str,
    name: &str,
    suffix: &str,
    image: &ImageData,
) -> Result<(), ExportError> {
    let file = format!("{folder}/{name}_{suffix}.{}", image.extension());
    writer.start_file(file, SimpleFileOptions::default())?;
    writer.write_all(&image.data)?;
    Ok(())
}

/// Lower-case the name and replace anything outside ASCII alphanumerics
/// with underscores; fall back when nothing printable remains.
fn safe_name(name: &str, fallback: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.chars().all(|c| c == '_') {
        fallback.to_string()
    } else {
        sanitized
    }
}

fn join_non_empty(left: &str, right: &str) -> String {
    if right.is_empty() {
        left.to_string()
    } else {
        format!("{left}_{right}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use cardstock_domain::{Character, Grimoire, GrimoireEntry, Item, Spell};

    use crate::infrastructure::{MemoryStore, RecordStore};
    use crate::repositories::Records;

    struct Fixture {
        characters: CharacterRecords,
        spells: SpellRecords,
        items: ItemRecords,
        attacks: AttackRecords,
        grimoires: GrimoireRecords,
    }

    impl Fixture {
        fn new() -> Self {
            let store: Arc<dyn RecordStore> = Arc::new(MemoryStore::new());
            Self {
                characters: Records::new(Arc::clone(&store)),
                spells: Records::new(Arc::clone(&store)),
                items: Records::new(Arc::clone(&store)),
                attacks: Records::new(Arc::clone(&store)),
                grimoires: Records::new(store),
            }
        }

        fn exporter(&self) -> ExportMediaArchive {
            ExportMediaArchive::new(
                self.characters.clone(),
                self.spells.clone(),
                self.items.clone(),
                self.attacks.clone(),
                self.grimoires.clone(),
            )
        }
    }

    fn archive_names(bytes: &[u8]) -> Vec<String> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(bytes.to_vec())).expect("readable archive");
        (0..archive.len())
            .map(|i| archive.by_index(i).expect("entry").name().to_string())
            .collect()
    }

    #[tokio::test]
    async fn archives_images_into_per_kind_folders() {
        let fixture = Fixture::new();

        let mut character = Character::new("Yana d'Arc");
        character.image = Some(ImageData::new(vec![1], "image/png"));
        character.background_image = Some(ImageData::new(vec![2], "image/jpeg"));
        fixture.characters.save(&character).await.expect("seed");

        let mut spell = Spell::new("Bola de Fogo");
        spell.image = Some(ImageData::new(vec![3], "image/png"));
        fixture.spells.save(&spell).await.expect("seed");

        let imageless = Item::new("Corda");
        fixture.items.save(&imageless).await.expect("seed");

        let bytes = fixture.exporter().execute().await.expect("archive");
        let names = archive_names(&bytes);

        assert!(names.contains(&"imagens_personagens/yana_d_arc_imagem.png".to_string()));
        assert!(names.contains(&"imagens_personagens/yana_d_arc_fundo.jpeg".to_string()));
        assert!(names.contains(&"imagens_magias_habilidades/bola_de_fogo_imagem.png".to_string()));
        assert_eq!(names.len(), 3);
    }

    #[tokio::test]
    async fn grimoire_pages_are_numbered_in_order() {
        let fixture = Fixture::new();
        let mut grimoire = Grimoire::new("Diário de Bordo", "Vol. 1");
        grimoire.push_entry(GrimoireEntry {
            subtitle: "Partida".to_string(),
            text: String::new(),
            image: Some(ImageData::new(vec![1], "image/png")),
        });
        grimoire.push_entry(GrimoireEntry {
            subtitle: String::new(),
            text: "sem imagem".to_string(),
            image: None,
        });
        grimoire.push_entry(GrimoireEntry {
            subtitle: "Chegada".to_string(),
            text: String::new(),
            image: Some(ImageData::new(vec![2], "image/png")),
        });
        fixture.grimoires.save(&grimoire).await.expect("seed");

        let bytes = fixture.exporter().execute().await.expect("archive");
        let names = archive_names(&bytes);

        assert!(names
            .contains(&"imagens_grimorios/di_rio_de_bordo_vol__1/pagina_01_partida.png".to_string()));
        assert!(names
            .contains(&"imagens_grimorios/di_rio_de_bordo_vol__1/pagina_03_chegada.png".to_string()));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn safe_name_falls_back_when_nothing_printable_remains() {
        assert_eq!(safe_name("***", "personagem"), "personagem");
        assert_eq!(safe_name("Fúria!", "x"), "f_ria_");
    }
}
