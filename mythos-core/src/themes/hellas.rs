//! "Mythos DB": the Greek mythology skin.

use crate::catalog::{Character, CharacterId, FamilyRecord, Label, Roster};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The work a character appears in. Display order follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Work {
    Iliad,
    Odyssey,
    Theogony,
    GreekMythology,
}

impl Work {
    pub fn name(&self) -> &'static str {
        match self {
            Work::Iliad => "La Ilíada",
            Work::Odyssey => "La Odisea",
            Work::Theogony => "Teogonía",
            Work::GreekMythology => "Mitología Griega General",
        }
    }

    pub fn all() -> [Work; 4] {
        [
            Work::Iliad,
            Work::Odyssey,
            Work::Theogony,
            Work::GreekMythology,
        ]
    }
}

impl Label for Work {
    fn label(&self) -> &'static str {
        self.name()
    }
}

impl fmt::Display for Work {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A character's classification; exactly one per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Dios,
    Titan,
    Primordial,
    Heroe,
    Mortal,
    Semidios,
    Ninfa,
    Monstruo,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Dios => "Dios",
            Kind::Titan => "Titán",
            Kind::Primordial => "Primordial",
            Kind::Heroe => "Héroe",
            Kind::Mortal => "Mortal",
            Kind::Semidios => "Semidiós",
            Kind::Ninfa => "Ninfa",
            Kind::Monstruo => "Monstruo",
        }
    }

    pub fn all() -> [Kind; 8] {
        [
            Kind::Dios,
            Kind::Titan,
            Kind::Primordial,
            Kind::Heroe,
            Kind::Mortal,
            Kind::Semidios,
            Kind::Ninfa,
            Kind::Monstruo,
        ]
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

/// The curated seed roster. Family links are internally consistent: spouse
/// links are symmetric and every parent link has the matching child entry.
pub fn seed_roster() -> Roster<Work, Kind> {
    Roster::from_characters(vec![
        Character::new(id(1), "Caos", Kind::Primordial)
            .with_alias("Χάος")
            .with_description("El vacío primigenio del que surgió todo lo existente.")
            .with_image_url("assets/hellas/caos.jpg")
            .with_tag(Work::Theogony)
            .with_family(FamilyRecord::new().with_child(id(2))),
        Character::new(id(2), "Gea", Kind::Primordial)
            .with_alias("Γαῖα")
            .with_alias("Terra")
            .with_description("La Tierra, madre de titanes y primera soberana del mundo.")
            .with_image_url("assets/hellas/gea.jpg")
            .with_tag(Work::Theogony)
            .with_family(
                FamilyRecord::new()
                    .with_spouse(id(3))
                    .with_children([id(4), id(5)]),
            ),
        Character::new(id(3), "Urano", Kind::Primordial)
            .with_alias("Οὐρανός")
            .with_alias("Caelus")
            .with_description("El Cielo estrellado, destronado por su hijo Cronos.")
            .with_image_url("assets/hellas/urano.jpg")
            .with_tag(Work::Theogony)
            .with_family(
                FamilyRecord::new()
                    .with_spouse(id(2))
                    .with_children([id(4), id(5)]),
            ),
        Character::new(id(4), "Cronos", Kind::Titan)
            .with_alias("Κρόνος")
            .with_alias("Saturno")
            .with_description("Titán del tiempo que devoró a sus hijos por miedo a ser destronado.")
            .with_image_url("assets/hellas/cronos.jpg")
            .with_tag(Work::Theogony)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(3))
                    .with_mother(id(2))
                    .with_spouse(id(5))
                    .with_children([id(6), id(7), id(8), id(9), id(10), id(11)]),
            ),
        Character::new(id(5), "Rea", Kind::Titan)
            .with_alias("Ῥέα")
            .with_alias("Ops")
            .with_description("Titánide madre de los olímpicos; salvó a Zeus del apetito de Cronos.")
            .with_image_url("assets/hellas/rea.jpg")
            .with_tag(Work::Theogony)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(3))
                    .with_mother(id(2))
                    .with_spouse(id(4))
                    .with_children([id(6), id(7), id(8), id(9), id(10), id(11)]),
            ),
        Character::new(id(6), "Zeus", Kind::Dios)
            .with_alias("Ζεύς")
            .with_alias("Júpiter")
            .with_description("Rey de los dioses, señor del rayo y del Olimpo.")
            .with_image_url("assets/hellas/zeus.jpg")
            .with_tag(Work::Theogony)
            .with_tag(Work::Iliad)
            .with_tag(Work::Odyssey)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(4))
                    .with_mother(id(5))
                    .with_spouse(id(7))
                    .with_children([id(12), id(13), id(14), id(15), id(16), id(17), id(18)]),
            ),
        Character::new(id(7), "Hera", Kind::Dios)
            .with_alias("Ἥρα")
            .with_alias("Juno")
            .with_description("Reina del Olimpo, diosa del matrimonio y celosa guardiana de sus votos.")
            .with_image_url("assets/hellas/hera.jpg")
            .with_tag(Work::Theogony)
            .with_tag(Work::Iliad)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(4))
                    .with_mother(id(5))
                    .with_spouse(id(6))
                    .with_children([id(12), id(13)]),
            ),
        Character::new(id(8), "Poseidón", Kind::Dios)
            .with_alias("Ποσειδῶν")
            .with_alias("Neptuno")
            .with_description("Dios del mar y de los terremotos, perseguidor de Odiseo.")
            .with_image_url("assets/hellas/poseidon.jpg")
            .with_tag(Work::Iliad)
            .with_tag(Work::Odyssey)
            .with_family(FamilyRecord::new().with_father(id(4)).with_mother(id(5))),
        Character::new(id(9), "Hades", Kind::Dios)
            .with_alias("ᾍδης")
            .with_alias("Plutón")
            .with_description("Señor del inframundo y de las riquezas bajo tierra.")
            .with_image_url("assets/hellas/hades.jpg")
            .with_tag(Work::GreekMythology)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(4))
                    .with_mother(id(5))
                    .with_spouse(id(18)),
            ),
        Character::new(id(10), "Deméter", Kind::Dios)
            .with_alias("Δημήτηρ")
            .with_alias("Ceres")
            .with_description("Diosa de la agricultura; su duelo trae el invierno.")
            .with_image_url("assets/hellas/demeter.jpg")
            .with_tag(Work::Theogony)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(4))
                    .with_mother(id(5))
                    .with_child(id(18)),
            ),
        Character::new(id(11), "Hestia", Kind::Dios)
            .with_alias("Ἑστία")
            .with_alias("Vesta")
            .with_description("Diosa del hogar y del fuego sagrado, la primogénita de Cronos.")
            .with_image_url("assets/hellas/hestia.jpg")
            .with_tag(Work::Theogony)
            .with_family(FamilyRecord::new().with_father(id(4)).with_mother(id(5))),
        Character::new(id(12), "Ares", Kind::Dios)
            .with_alias("Ἄρης")
            .with_alias("Marte")
            .with_description("Dios de la guerra brutal, poco querido incluso en el Olimpo.")
            .with_image_url("assets/hellas/ares.jpg")
            .with_tag(Work::Iliad)
            .with_family(FamilyRecord::new().with_father(id(6)).with_mother(id(7))),
        Character::new(id(13), "Hefesto", Kind::Dios)
            .with_alias("Ἥφαιστος")
            .with_alias("Vulcano")
            .with_description("Herrero divino, forjador de las armas de Aquiles.")
            .with_image_url("assets/hellas/hefesto.jpg")
            .with_tag(Work::Iliad)
            .with_family(FamilyRecord::new().with_father(id(6)).with_mother(id(7))),
        Character::new(id(14), "Atenea", Kind::Dios)
            .with_alias("Ἀθηνᾶ")
            .with_alias("Minerva")
            .with_description("Diosa de la sabiduría y la estrategia, nacida de la cabeza de Zeus.")
            .with_image_url("assets/hellas/atenea.jpg")
            .with_tag(Work::Iliad)
            .with_tag(Work::Odyssey)
            .with_family(FamilyRecord::new().with_father(id(6))),
        Character::new(id(15), "Apolo", Kind::Dios)
            .with_alias("Ἀπόλλων")
            .with_alias("Febo")
            .with_description("Dios de la luz, la música y la profecía; su plaga abre La Ilíada.")
            .with_image_url("assets/hellas/apolo.jpg")
            .with_tag(Work::Iliad)
            .with_family(FamilyRecord::new().with_father(id(6))),
        Character::new(id(16), "Artemisa", Kind::Dios)
            .with_alias("Ἄρτεμις")
            .with_alias("Diana")
            .with_description("Diosa de la caza y de la luna, hermana gemela de Apolo.")
            .with_image_url("assets/hellas/artemisa.jpg")
            .with_tag(Work::Iliad)
            .with_family(FamilyRecord::new().with_father(id(6))),
        Character::new(id(17), "Heracles", Kind::Semidios)
            .with_alias("Ἡρακλῆς")
            .with_alias("Hércules")
            .with_description("El mayor de los héroes, célebre por sus doce trabajos.")
            .with_image_url("assets/hellas/heracles.jpg")
            .with_tag(Work::GreekMythology)
            .with_family(FamilyRecord::new().with_father(id(6))),
        Character::new(id(18), "Perséfone", Kind::Dios)
            .with_alias("Περσεφόνη")
            .with_alias("Proserpina")
            .with_description("Reina del inframundo, que divide el año entre dos mundos.")
            .with_image_url("assets/hellas/persefone.jpg")
            .with_tag(Work::GreekMythology)
            .with_family(
                FamilyRecord::new()
                    .with_father(id(6))
                    .with_mother(id(10))
                    .with_spouse(id(9)),
            ),
        Character::new(id(19), "Aquiles", Kind::Heroe)
            .with_alias("Ἀχιλλεύς")
            .with_description("El mejor de los aqueos; su cólera es el eje de La Ilíada.")
            .with_image_url("assets/hellas/aquiles.jpg")
            .with_tag(Work::Iliad),
        Character::new(id(20), "Odiseo", Kind::Heroe)
            .with_alias("Ὀδυσσεύς")
            .with_alias("Ulises")
            .with_description("El astuto rey de Ítaca, que tardó diez años en volver a casa.")
            .with_image_url("assets/hellas/odiseo.jpg")
            .with_tag(Work::Iliad)
            .with_tag(Work::Odyssey),
        Character::new(id(21), "Medusa", Kind::Monstruo)
            .with_alias("Μέδουσα")
            .with_description("La gorgona de mirada petrificante, vencida por Perseo.")
            .with_image_url("assets/hellas/medusa.jpg")
            .with_tag(Work::GreekMythology),
    ])
}
