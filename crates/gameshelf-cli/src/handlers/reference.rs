//! Reference data handlers: companies, consoles and genres.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{OutputFormat, print_json, print_named_table};

/// Which reference table a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Company,
    Console,
    Genre,
}

impl ReferenceKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Console => "Console",
            Self::Genre => "Genre",
        }
    }
}

/// List every row of a reference table, sorted by name.
pub async fn list(ctx: &CliContext, kind: ReferenceKind) -> Result<(), CliError> {
    let catalog = ctx.app().catalog();
    let json = ctx.format() == OutputFormat::Json;

    match kind {
        ReferenceKind::Company => {
            let rows = catalog.list_companies().await?;
            if json {
                return print_json(&rows);
            }
            print_named_table("companies", rows.iter().map(|r| (r.id, r.name.as_str())));
        }
        ReferenceKind::Console => {
            let rows = catalog.list_consoles().await?;
            if json {
                return print_json(&rows);
            }
            print_named_table("consoles", rows.iter().map(|r| (r.id, r.name.as_str())));
        }
        ReferenceKind::Genre => {
            let rows = catalog.list_genres().await?;
            if json {
                return print_json(&rows);
            }
            print_named_table("genres", rows.iter().map(|r| (r.id, r.name.as_str())));
        }
    }
    Ok(())
}

/// Add a row to a reference table.
pub async fn add(ctx: &CliContext, kind: ReferenceKind, name: &str) -> Result<(), CliError> {
    let catalog = ctx.app().catalog();
    match kind {
        ReferenceKind::Company => catalog.create_company(name).await?,
        ReferenceKind::Console => catalog.create_console(name).await?,
        ReferenceKind::Genre => catalog.create_genre(name).await?,
    }

    if ctx.format() == OutputFormat::Json {
        return print_json(&serde_json::json!({ "created": kind.label(), "name": name.trim() }));
    }
    println!("{} '{}' added.", kind.label(), name.trim());
    Ok(())
}
