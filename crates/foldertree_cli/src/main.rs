//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `foldertree_core` linkage outside any host application.
//! - Run one scripted session and print the resulting snapshot as JSON.

use foldertree_core::{Document, Folder, ReservedNames, StoreOptions, TreeStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("foldertree_core ping={}", foldertree_core::ping());
    println!("foldertree_core version={}", foldertree_core::core_version());

    match run_session() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("session failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_session() -> Result<String, Box<dyn std::error::Error>> {
    let invoice = Document::new("invoice-0142.pdf");
    let contract = Document::new("contract.docx");
    let inbox = Folder::new("Inbox").with_documents([invoice.clone(), contract.clone()]);
    let inbox_id = inbox.id;

    let mut store = TreeStore::new(
        vec![Folder::system("Unassigned"), inbox],
        StoreOptions::default(),
    )?;
    let reserved = ReservedNames::new(["Shared"]);

    let finance = store.create_folder(None, "Finance", &reserved)?;
    let archive = store.create_folder(Some(finance), "Archive", &reserved)?;

    store.select_documents(vec![invoice.id], inbox_id);
    store.move_selected(archive)?;

    store.request_delete(inbox_id)?;
    store.confirm_delete()?;

    Ok(serde_json::to_string_pretty(&store.snapshot())?)
}
