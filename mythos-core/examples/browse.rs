//! Interactive roster browser example
//!
//! This example loads the Greek seed roster and lets you filter it from
//! the command line: type text to search, `kind <nombre>` to filter by
//! kind, `ver <nombre>` to show a genealogy, or blank to reset.
//!
//! Run with: cargo run -p mythos-core --example browse

use mythos_core::catalog::Label;
use mythos_core::filter::FilterCriteria;
use mythos_core::genealogy::GenealogyView;
use mythos_core::session::CatalogSession;
use mythos_core::themes::hellas::{self, Kind};
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = CatalogSession::new(hellas::seed_roster());

    println!("Mythos DB");
    println!("=========");
    println!(
        "{} personajes. Escribe para buscar, 'kind <nombre>', 'ver <nombre>', 'quit' para salir.\n",
        session.total_count()
    );

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Some(name) = input.strip_prefix("ver ") {
            let Some(character) = session
                .roster()
                .iter()
                .find(|c| c.matches_name(name.trim()))
            else {
                println!("No existe '{}'", name.trim());
                continue;
            };
            let view = GenealogyView::of(session.roster(), character);
            println!("{}:", character.name);
            if let Some(father) = &view.father {
                println!("  Padre:  {}", father.name);
            }
            if let Some(mother) = &view.mother {
                println!("  Madre:  {}", mother.name);
            }
            for spouse in &view.spouses {
                println!("  Pareja: {}", spouse.name);
            }
            for child in &view.children {
                println!("  Hijo/a: {}", child.name);
            }
            if view.is_empty() {
                println!("  (sin familia registrada)");
            }
            continue;
        }

        let criteria = if let Some(kind_name) = input.strip_prefix("kind ") {
            match Kind::all().iter().find(|k| {
                k.label().eq_ignore_ascii_case(kind_name.trim())
            }) {
                Some(kind) => FilterCriteria::new().with_kind(*kind),
                None => {
                    println!("Tipos: {:?}", Kind::all().iter().map(|k| k.label()).collect::<Vec<_>>());
                    continue;
                }
            }
        } else if input.is_empty() {
            FilterCriteria::new()
        } else {
            FilterCriteria::new().with_query(input)
        };

        session.set_criteria(criteria);
        for character in session.visible() {
            println!("  {} ({})", character.name, character.kind.label());
        }
        println!(
            "  -- {} de {} visibles\n",
            session.visible_count(),
            session.total_count()
        );
    }

    Ok(())
}
