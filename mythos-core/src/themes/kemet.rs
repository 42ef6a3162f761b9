//! "Kemet DB": the Egyptian mythology skin.

use crate::catalog::{Character, CharacterId, FamilyRecord, Label, Roster};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The era a character belongs to. Display order follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    ReinoAntiguo,
    ReinoMedio,
    ReinoNuevo,
    PeriodoPtolemaico,
}

impl Era {
    pub fn name(&self) -> &'static str {
        match self {
            Era::ReinoAntiguo => "Reino Antiguo",
            Era::ReinoMedio => "Reino Medio",
            Era::ReinoNuevo => "Reino Nuevo",
            Era::PeriodoPtolemaico => "Período Ptolemaico",
        }
    }

    pub fn all() -> [Era; 4] {
        [
            Era::ReinoAntiguo,
            Era::ReinoMedio,
            Era::ReinoNuevo,
            Era::PeriodoPtolemaico,
        ]
    }
}

impl Label for Era {
    fn label(&self) -> &'static str {
        self.name()
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A character's classification; exactly one per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Dios,
    Faraon,
    Leyenda,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Dios => "Dios",
            Kind::Faraon => "Faraón",
            Kind::Leyenda => "Leyenda",
        }
    }

    pub fn all() -> [Kind; 3] {
        [Kind::Dios, Kind::Faraon, Kind::Leyenda]
    }
}

impl Label for Kind {
    fn label(&self) -> &'static str {
        self.name()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn id(n: u32) -> CharacterId {
    CharacterId(n)
}

/// The curated seed roster of dioses, faraones y leyendas del Nilo.
pub fn seed_roster() -> Roster<Era, Kind> {
    Roster::from_characters(vec![
        Character::new(id(1), "Nun", Kind::Dios)
            .with_alias("Nu")
            .with_description("Las aguas primordiales de las que emergió el primer amanecer.")
            .with_image_url("assets/kemet/nun.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_family(FamilyRecord::new().with_child(id(2))),
        Character::new(id(2), "Ra", Kind::Dios)
            .with_alias("Re")
            .with_alias("El Sol del Mediodía")
            .with_description("Dios solar supremo que cruza el cielo en su barca cada día.")
            .with_image_url("assets/kemet/ra.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_tag(Era::ReinoMedio)
            .with_tag(Era::ReinoNuevo)
            .with_family(FamilyRecord::new().with_children([id(3), id(4), id(14)])),
        Character::new(id(3), "Shu", Kind::Dios)
            .with_alias("El Aire")
            .with_description("Dios del aire seco que separa el cielo de la tierra.")
            .with_image_url("assets/kemet/shu.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(2))
                    .with_spouse(id(4))
                    .with_children([id(5), id(6)]),
            ),
        Character::new(id(4), "Tefnut", Kind::Dios)
            .with_alias("La Humedad")
            .with_description("Diosa leona de la humedad, gemela y esposa de Shu.")
            .with_image_url("assets/kemet/tefnut.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(2))
                    .with_spouse(id(3))
                    .with_children([id(5), id(6)]),
            ),
        Character::new(id(5), "Geb", Kind::Dios)
            .with_alias("La Tierra")
            .with_description("Dios de la tierra; su risa provoca los terremotos.")
            .with_image_url("assets/kemet/geb.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(3))
                    .with_mother(id(4))
                    .with_spouse(id(6))
                    .with_children([id(7), id(8), id(9), id(10)]),
            ),
        Character::new(id(6), "Nut", Kind::Dios)
            .with_alias("La Bóveda Celeste")
            .with_description("Diosa del cielo que se traga el sol cada atardecer.")
            .with_image_url("assets/kemet/nut.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(3))
                    .with_mother(id(4))
                    .with_spouse(id(5))
                    .with_children([id(7), id(8), id(9), id(10)]),
            ),
        Character::new(id(7), "Osiris", Kind::Dios)
            .with_alias("Usir")
            .with_description("Señor del más allá, asesinado por Set y restaurado por Isis.")
            .with_image_url("assets/kemet/osiris.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_tag(Era::ReinoMedio)
            .with_tag(Era::ReinoNuevo)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(5))
                    .with_mother(id(6))
                    .with_spouse(id(8))
                    .with_children([id(11), id(12)]),
            ),
        Character::new(id(8), "Isis", Kind::Dios)
            .with_alias("Aset")
            .with_alias("La Gran Maga")
            .with_description("Diosa de la magia y la maternidad, la más venerada del panteón.")
            .with_image_url("assets/kemet/isis.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_tag(Era::ReinoMedio)
            .with_tag(Era::ReinoNuevo)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(5))
                    .with_mother(id(6))
                    .with_spouse(id(7))
                    .with_child(id(11)),
            ),
        Character::new(id(9), "Set", Kind::Dios)
            .with_alias("Seth")
            .with_alias("Señor del Desierto")
            .with_description("Dios del caos y las tormentas, fratricida de Osiris.")
            .with_image_url("assets/kemet/set.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_tag(Era::ReinoMedio)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(5))
                    .with_mother(id(6))
                    .with_spouse(id(10)),
            ),
        Character::new(id(10), "Neftis", Kind::Dios)
            .with_alias("Nebet-Het")
            .with_description("Señora de la casa, plañidera junto a Isis en los ritos funerarios.")
            .with_image_url("assets/kemet/neftis.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(5))
                    .with_mother(id(6))
                    .with_spouse(id(9))
                    .with_child(id(12)),
            ),
        Character::new(id(11), "Horus", Kind::Dios)
            .with_alias("Hor")
            .with_alias("El Halcón")
            .with_description("Dios halcón, vengador de su padre y patrono de los faraones.")
            .with_image_url("assets/kemet/horus.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_tag(Era::ReinoMedio)
            .with_tag(Era::ReinoNuevo)
            .with_family(FamilyRecord::new().with_father(id(7)).with_mother(id(8))),
        Character::new(id(12), "Anubis", Kind::Dios)
            .with_alias("Anpu")
            .with_alias("El Embalsamador")
            .with_description("Dios chacal que guía a los muertos y pesa sus corazones.")
            .with_image_url("assets/kemet/anubis.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_tag(Era::ReinoMedio)
            .with_family(FamilyRecord::new().with_father(id(7)).with_mother(id(10))),
        Character::new(id(13), "Thot", Kind::Dios)
            .with_alias("Dyehuty")
            .with_description("Dios ibis de la escritura, la luna y la sabiduría.")
            .with_image_url("assets/kemet/thot.jpg")
            .with_tag(Era::ReinoAntiguo)
            .with_tag(Era::ReinoMedio)
            .with_tag(Era::ReinoNuevo),
        Character::new(id(14), "Bastet", Kind::Dios)
            .with_alias("Bast")
            .with_description("Diosa gata del hogar, protectora contra las serpientes.")
            .with_image_url("assets/kemet/bastet.jpg")
            .with_tag(Era::ReinoMedio)
            .with_tag(Era::ReinoNuevo)
            .with_family(FamilyRecord::new().with_father(id(2))),
        Character::new(id(15), "Keops", Kind::Faraon)
            .with_alias("Jufu")
            .with_description("Faraón de la cuarta dinastía, constructor de la Gran Pirámide.")
            .with_image_url("assets/kemet/keops.jpg")
            .with_tag(Era::ReinoAntiguo),
        Character::new(id(16), "Hatshepsut", Kind::Faraon)
            .with_alias("La Primera de las Nobles Damas")
            .with_description("La mujer faraón cuyo reinado trajo paz y comercio próspero.")
            .with_image_url("assets/kemet/hatshepsut.jpg")
            .with_tag(Era::ReinoNuevo),
        Character::new(id(17), "Ramsés II", Kind::Faraon)
            .with_alias("Ozymandias")
            .with_alias("El Grande")
            .with_description("El constructor más prolífico de Egipto y señor de Abu Simbel.")
            .with_image_url("assets/kemet/ramses.jpg")
            .with_tag(Era::ReinoNuevo),
        Character::new(id(18), "Tutankamón", Kind::Faraon)
            .with_alias("El Faraón Niño")
            .with_description("Faraón de reinado breve, inmortal por su tumba intacta.")
            .with_image_url("assets/kemet/tutankamon.jpg")
            .with_tag(Era::ReinoNuevo),
        Character::new(id(19), "Cleopatra VII", Kind::Faraon)
            .with_alias("La Última de los Ptolomeos")
            .with_description("La última soberana de Egipto, aliada de Roma y fin de una era.")
            .with_image_url("assets/kemet/cleopatra.jpg")
            .with_tag(Era::PeriodoPtolemaico),
        Character::new(id(20), "Imhotep", Kind::Leyenda)
            .with_alias("El Que Viene en Paz")
            .with_description("Arquitecto de la pirámide escalonada, deificado siglos después.")
            .with_image_url("assets/kemet/imhotep.jpg")
            .with_tag(Era::ReinoAntiguo),
    ])
}
