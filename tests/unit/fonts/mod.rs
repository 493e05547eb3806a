use super::*;

#[test]
fn empty_directory_contributes_no_faces() {
    let dir = std::env::temp_dir().join(format!("chronos-fonts-empty-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("notes.txt"), b"not a font").unwrap();

    let mut db = fontdb::Database::new();
    load_fonts_from_dir(&mut db, &dir);
    assert_eq!(db.len(), 0);
    assert!(pick_family(&db).is_none());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_directory_is_tolerated() {
    let mut db = fontdb::Database::new();
    load_fonts_from_dir(&mut db, Path::new("/definitely/not/a/fonts/dir"));
    assert_eq!(db.len(), 0);
}

#[test]
fn discovered_set_is_consistent_if_fonts_exist() {
    let Ok(fonts) = FontSet::discover(None) else {
        return;
    };
    assert!(!fonts.family().is_empty());
    assert!(!fonts.faces().is_empty());
    assert!(fonts.faces().len() <= 2);
    assert!(fonts.database().len() > 0);
}
