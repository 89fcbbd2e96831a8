use clinic_registry::core::input::Rejection;
use clinic_registry::core::session::{FAREWELL, NO_DATA, NO_MATCHES};
use clinic_registry::core::table::EMPTY_LISTING;
use clinic_registry::{Console, Limits, PatientStore, Session};
use std::io::Cursor;

fn run_script_with(script: &str, limits: Limits) -> (String, PatientStore) {
    let console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let mut session = Session::new(console, limits);
    session.run().unwrap();
    let (console, store) = session.into_parts();
    (String::from_utf8(console.into_writer()).unwrap(), store)
}

fn run_script(script: &str) -> (String, PatientStore) {
    run_script_with(script, Limits::default())
}

#[test]
fn test_register_then_statistics() {
    let (output, store) = run_script("1\nAna Silva\n30\n11999990000\n2\n5\n");

    assert_eq!(store.len(), 1);
    assert!(output.contains("Paciente cadastrado com sucesso."));
    assert!(output.contains("Total de pacientes: 1"));
    assert!(output.contains("Idade média: 30.00"));
    assert!(output.contains("Mais jovem: Ana Silva (30 anos)"));
    assert!(output.contains("Mais velho: Ana Silva (30 anos)"));
    assert!(output.trim_end().ends_with(FAREWELL));
}

#[test]
fn test_statistics_tie_break_through_menu() {
    let script = "1\nAna\n20\n111\n1\nBruno\n40\n222\n1\nCarla\n20\n333\n2\n5\n";
    let (output, store) = run_script(script);

    assert_eq!(store.len(), 3);
    assert!(output.contains("Idade média: 26.67"));
    assert!(output.contains("Mais jovem: Ana (20 anos)"));
    assert!(output.contains("Mais velho: Bruno (40 anos)"));
}

#[test]
fn test_duplicate_declined() {
    let script = "1\nAna Silva\n30\n11999990000\n1\n  ana   SILVA \n31\n11999990000\nn\n5\n";
    let (output, store) = run_script(script);

    assert_eq!(store.len(), 1);
    assert!(output.contains("Atenção: já existe um paciente com este nome e telefone"));
    assert!(output.contains("Cadastro cancelado."));
}

#[test]
fn test_duplicate_confirmed() {
    let script = "1\nAna Silva\n30\n11999990000\n1\nAna Silva\n30\n11999990000\ns\n5\n";
    let (output, store) = run_script(script);

    assert_eq!(store.len(), 2);
    assert_eq!(store.patients()[0], store.patients()[1]);
    assert!(output.contains("duplicidade confirmada"));
}

#[test]
fn test_search_keeps_store_order() {
    let script = "1\nAna Silva\n30\n1\n1\nPedro\n40\n2\n1\nMariana Costa\n25\n3\n3\nana\n5\n";
    let (output, _) = run_script(script);

    let results = output
        .split("2 paciente(s) encontrado(s):")
        .nth(1)
        .expect("search header missing");
    let ana = results.find("Ana Silva").unwrap();
    let mariana = results.find("Mariana Costa").unwrap();
    assert!(ana < mariana);
    assert!(!output.contains("Pedro"));
}

#[test]
fn test_search_without_matches() {
    let (output, _) = run_script("1\nAna\n30\n1\n3\nzé\n5\n");
    assert!(output.contains(NO_MATCHES));
    assert!(!output.contains("encontrado(s):"));
}

#[test]
fn test_empty_store_list_and_statistics() {
    let (output, store) = run_script("4\n2\n5\n");

    assert!(store.is_empty());
    assert!(output.contains(EMPTY_LISTING));
    assert!(output.contains(NO_DATA));
    assert!(!output.contains("Telefone"));
}

#[test]
fn test_listing_prints_table() {
    let (output, _) = run_script("1\nAna\n7\n123\n4\n5\n");

    assert!(output.contains("Nome  Idade  Telefone\n"));
    assert!(output.contains("---------------------\n"));
    assert!(output.contains("Ana       7  123     \n"));
}

#[test]
fn test_invalid_menu_entries_reprompt() {
    let (output, _) = run_script("abc\n9\n0\n5\n");

    assert!(output.contains(&Rejection::NotAnInteger.to_string()));
    assert!(output.contains(&Rejection::AboveMaximum(5).to_string()));
    assert!(output.contains(&Rejection::BelowMinimum(1).to_string()));
    assert!(output.trim_end().ends_with(FAREWELL));
}

#[test]
fn test_registration_reprompts_invalid_fields() {
    let script = "1\n   \nAna\n150\n-1\nquarenta\n40\n\n123\n5\n";
    let (output, store) = run_script(script);

    assert_eq!(store.len(), 1);
    let patient = &store.patients()[0];
    assert_eq!(patient.name, "Ana");
    assert_eq!(patient.age, 40);
    assert_eq!(patient.phone, "123");
    assert_eq!(output.matches(&Rejection::Empty.to_string()).count(), 2);
    assert!(output.contains(&Rejection::AboveMaximum(130).to_string()));
    assert!(output.contains(&Rejection::BelowMinimum(0).to_string()));
}

#[test]
fn test_over_length_name_rejected() {
    let long_name = "x".repeat(101);
    let script = format!("1\n{}\nAna\n30\n1\n5\n", long_name);
    let (output, store) = run_script(&script);

    assert_eq!(store.len(), 1);
    assert!(output.contains(&Rejection::TooLong(100).to_string()));
}

#[test]
fn test_custom_limits_apply() {
    let limits = Limits {
        age_max: 120,
        ..Limits::default()
    };
    let (output, store) = run_script_with("1\nAna\n125\n120\n1\n5\n", limits);

    assert_eq!(store.len(), 1);
    assert!(output.contains(&Rejection::AboveMaximum(120).to_string()));
}

#[test]
fn test_closed_input_ends_session() {
    let (output, store) = run_script("1\nAna\n");

    assert!(store.is_empty());
    assert!(output.trim_end().ends_with(FAREWELL));
}

#[test]
fn test_store_accessor_reflects_session() {
    let console = Console::new(Cursor::new("1\nAna\n30\n1\n5\n".to_string()), Vec::new());
    let mut session = Session::new(console, Limits::default());
    assert!(session.store().is_empty());

    session.run().unwrap();
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().patients()[0].name, "Ana");
}

#[test]
fn test_huge_age_reports_upper_bound() {
    let (output, store) = run_script("1\nAna\n99999999999999999999\n30\n1\n5\n");

    assert_eq!(store.len(), 1);
    assert!(output.contains(&Rejection::AboveMaximum(130).to_string()));
    assert!(!output.contains(&Rejection::NotAnInteger.to_string()));
}
