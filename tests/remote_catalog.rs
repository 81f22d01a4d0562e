mod common;

use anyhow::Result;

use pokedeck::remote::ErrorKind;
use pokedeck::session::{CollectionSession, SearchFlow};

#[test]
fn search_by_number_and_name() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = guard.admin_client()?;

    let by_id = client.search_catalog_by_id(133)?;
    assert_eq!(by_id.name, "eevee");

    let by_name = client.search_catalog_by_name("Snorlax")?;
    assert_eq!(by_name.id, 143);

    let missing = client.search_catalog_by_name("missingno").unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotFound);

    // Later generations are not loaded until an admin asks for them.
    let unloaded = client.search_catalog_by_id(152).unwrap_err();
    assert_eq!(unloaded.kind(), ErrorKind::NotFound);
    Ok(())
}

#[test]
fn adding_twice_is_a_conflict_and_changes_nothing() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = guard.admin_client()?;

    let mut collection = CollectionSession::new(20);
    collection.load(&client)?;
    let before = collection.total_count();

    let mut flow = SearchFlow::default();
    flow.search(&client, "eevee")?;
    let card = flow.add(&client)?;
    collection.absorb_added(card);
    assert_eq!(collection.total_count(), before + 1);
    assert!(flow.staged().is_none());

    flow.search(&client, "133")?;
    let err = flow.add(&client).unwrap_err();
    assert!(err.remote().is_some_and(|e| e.is_conflict()));
    assert!(flow.display().is_conflict());
    assert!(flow.staged().is_some());

    collection.load(&client)?;
    assert_eq!(collection.total_count(), before + 1);
    Ok(())
}
