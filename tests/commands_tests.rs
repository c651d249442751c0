use estatebook::commands::{Command, SHOWING_HELP_MESSAGE};
use estatebook::logic::Logic;
use estatebook::model::*;
use estatebook::parser::parse_command;
use estatebook::storage;

fn run(model: &mut ModelManager, input: &str) -> Result<String, String> {
    parse_command(input)
        .and_then(|cmd| cmd.execute(model))
        .map(|r| r.feedback)
        .map_err(|e| e.to_string())
}

fn setup() -> ModelManager {
    let mut model = ModelManager::default();
    run(&mut model, "addbuyer n/Alice Pauline p/94351253 e/alice@example.com ah/123 Jurong West i/Condo").unwrap();
    run(&mut model, "addbuyer n/Benson Meier p/98765432 e/johnd@example.com ah/311 Clementi i/HDB t/urgent").unwrap();
    run(&mut model, "addseller n/David Li p/91031282 e/lidavid@example.com ah/12 Holland as/88 Toa Payoh i/4-room").unwrap();
    model
}

fn buyer_names(model: &ModelManager) -> Vec<String> {
    model.filtered_buyers().iter().map(|b| b.name.to_string()).collect()
}

// ==========================================================================
// ADD
// ==========================================================================

#[test]
fn add_buyer_reports_and_stores() {
    let mut model = ModelManager::default();
    let feedback = run(&mut model, "addbuyer n/adam p/3094 e/email@com ah/homeaddress i/info").unwrap();
    assert!(feedback.starts_with("New buyer added: adam"));
    assert_eq!(buyer_names(&model), vec!["adam"]);
}

#[test]
fn add_similar_buyer_is_rejected() {
    let mut model = setup();
    let err = run(&mut model, "addbuyer n/alice pauline p/94351253 e/alice@example.com ah/elsewhere i/Landed").unwrap_err();
    assert_eq!(err, "This buyer already exists in the address book");
    assert_eq!(model.address_book().buyers().len(), 2);
}

#[test]
fn add_similar_seller_is_rejected() {
    let mut model = setup();
    let err = run(&mut model, "addseller n/David Li p/91031282 e/lidavid@example.com ah/x as/y i/z").unwrap_err();
    assert_eq!(err, "This seller already exists in the address book");
}

// ==========================================================================
// DELETE / EDIT
// ==========================================================================

#[test]
fn delete_uses_displayed_index() {
    let mut model = setup();
    run(&mut model, "findbuyer benson").unwrap();
    let feedback = run(&mut model, "deletebuyer 1").unwrap();
    assert!(feedback.starts_with("Deleted buyer: Benson Meier"));
    run(&mut model, "list").unwrap();
    assert_eq!(buyer_names(&model), vec!["Alice Pauline"]);
}

#[test]
fn delete_out_of_range_fails_without_change() {
    let mut model = setup();
    let err = run(&mut model, "deleteseller 2").unwrap_err();
    assert_eq!(err, "The seller index provided is invalid");
    assert_eq!(model.address_book().sellers().len(), 1);
}

#[test]
fn edit_buyer_keeps_position_and_other_fields() {
    let mut model = setup();
    run(&mut model, "editbuyer 1 p/90000000 t/vip").unwrap();
    let alice = &model.address_book().buyers()[0];
    assert_eq!(alice.phone.as_str(), "90000000");
    assert_eq!(alice.tag_names(), vec!["vip"]);
    assert_eq!(alice.house_info().as_str(), "Condo");
}

#[test]
fn edit_clears_tags_with_empty_prefix() {
    let mut model = setup();
    run(&mut model, "editbuyer 2 t/").unwrap();
    assert!(model.address_book().buyers()[1].tags.is_empty());
}

#[test]
fn edit_into_duplicate_fails() {
    let mut model = setup();
    let err = run(&mut model, "editbuyer 2 n/Alice Pauline p/94351253 e/alice@example.com").unwrap_err();
    assert_eq!(err, "This buyer already exists in the address book");
    assert_eq!(model.address_book().buyers()[1].name.as_str(), "Benson Meier");
}

#[test]
fn edit_seller_changes_selling_address() {
    let mut model = setup();
    let feedback = run(&mut model, "editseller 1 as/5 Orchard Road").unwrap();
    assert!(feedback.contains("Selling: 5 Orchard Road"));
}

// ==========================================================================
// FIND / SORT / LIST / CLEAR
// ==========================================================================

#[test]
fn find_reports_count() {
    let mut model = setup();
    assert_eq!(run(&mut model, "findbuyer alice nobody").unwrap(), "1 buyers listed!");
    assert_eq!(run(&mut model, "findseller nobody").unwrap(), "0 sellers listed!");
    assert_eq!(buyer_names(&model), vec!["Alice Pauline"]);
}

#[test]
fn sort_then_list_keeps_order() {
    let mut model = setup();
    let feedback = run(&mut model, "sortbuyer by/name o/desc").unwrap();
    assert_eq!(feedback, "Buyers sorted by name (descending)");
    run(&mut model, "findbuyer alice").unwrap();
    run(&mut model, "list").unwrap();
    assert_eq!(buyer_names(&model), vec!["Benson Meier", "Alice Pauline"]);
}

#[test]
fn clear_empties_both_lists() {
    let mut model = setup();
    run(&mut model, "clear").unwrap();
    assert!(model.address_book().is_empty());
    assert!(model.filtered_sellers().is_empty());
}

#[test]
fn help_and_exit_set_flags() {
    let mut model = ModelManager::default();
    let help = Command::Help.execute(&mut model).unwrap();
    assert!(help.show_help);
    assert_eq!(help.feedback, SHOWING_HELP_MESSAGE);
    assert!(Command::Exit.execute(&mut model).unwrap().exit);
}

#[test]
fn clear_with_extra_text_keeps_data() {
    let mut model = setup();
    assert!(run(&mut model, "clear everything now").is_err());
    assert_eq!(model.address_book().buyers().len(), 2);
    assert_eq!(model.address_book().sellers().len(), 1);
}

// ==========================================================================
// LOGIC
// ==========================================================================

#[test]
fn logic_saves_after_mutating_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("book.json");
    let mut model = ModelManager::default();
    model.set_address_book_file_path(path.clone());
    let mut logic = Logic::new(model);

    logic.execute("list").unwrap();
    assert!(!path.exists());

    logic
        .execute("addseller n/Irfan p/92492021 e/irfan@example.com ah/Tampines as/Kembangan i/Semi-d")
        .unwrap();
    let saved = storage::read_address_book(&path).unwrap().unwrap();
    assert_eq!(&saved, logic.model().address_book());
}

#[test]
fn logic_parse_error_leaves_model_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = ModelManager::default();
    model.set_address_book_file_path(dir.path().join("book.json"));
    let mut logic = Logic::new(model);

    let err = logic
        .execute("addbuyer n/adam p/badnumber e/email@com ah/homeaddress i/info")
        .unwrap_err();
    assert!(err.is_parse_error());
    assert!(logic.model().address_book().is_empty());
    assert!(!dir.path().join("book.json").exists());
}
