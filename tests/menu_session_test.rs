use activity_console::config::DisplayConfig;
use activity_console::{AppError, AppConfig, Console, CurrencyConverter, MainMenu};
use std::io::Cursor;

type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str, pause_after_activity: bool) -> TestConsole {
    let display = DisplayConfig {
        pause_after_activity,
        ..DisplayConfig::default()
    };
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), display)
}

fn run_session(input: &str) -> (activity_console::Result<()>, String) {
    let mut console = console(input, false);
    let result = MainMenu::default().run(&mut console);
    let out = String::from_utf8(console.into_writer()).unwrap();
    (result, out)
}

#[test]
fn test_banner_menu_and_exit() {
    let (result, out) = run_session("5\n");
    assert!(result.is_ok());

    assert!(out.contains("WELCOME TO PROGRAMMING ACTIVITY SYSTEM"));
    assert!(out.contains(">>> ===== PROGRAMMING ACTIVITY MENU ===== <<<"));
    assert!(out.contains("[1] Virtual Student Info\n"));
    assert!(out.contains("[4] Currency Exchange Calculator\n"));
    assert!(out.contains("[5] Exit Program\n"));
    assert!(out.contains("Enter choice (1-5): "));
    assert!(out.ends_with("Exiting program... Goodbye!\n"));
}

#[test]
fn test_invalid_menu_choices_are_retried() {
    let (result, out) = run_session("9\nfoo\n0\n5\n");
    assert!(result.is_ok());
    assert_eq!(out.matches("[ERROR] Choice must be 1-5. Try again.").count(), 2);
    assert_eq!(out.matches("[ERROR] Invalid input! Try again.").count(), 1);
    assert_eq!(out.matches("Enter choice (1-5): ").count(), 4);
}

#[test]
fn test_student_info_then_exit() {
    let (result, out) = run_session("1\n5\n");
    assert!(result.is_ok());
    assert!(out.contains(">>> ===== Virtual Student Info ===== <<<"));
    assert!(out.contains("Name: Alberto Jr Deniros\n"));
    assert!(out.contains("CODING DEVICES: Desktop Computer\n"));
    // Menu is shown again after the activity returns.
    assert_eq!(out.matches(">>> ===== PROGRAMMING ACTIVITY MENU ===== <<<").count(), 2);
}

#[test]
fn test_student_info_uses_configured_profile() {
    let config = AppConfig::from_toml_str(
        r#"
[display]
pause_after_activity = false

[student]
name = "Maria Santos"
section = "BSIT 2-B"
"#,
    )
    .unwrap();

    let mut console = Console::new(
        Cursor::new(b"1\n5\n".to_vec()),
        Vec::new(),
        config.display.clone(),
    );
    MainMenu::new(&config, CurrencyConverter::default())
        .run(&mut console)
        .unwrap();
    let out = String::from_utf8(console.into_writer()).unwrap();

    assert!(out.contains("Name: Maria Santos\n"));
    assert!(out.contains("Section and Course: BSIT 2-B\n"));
    assert!(out.contains("AGE: 23\n"));
}

#[test]
fn test_pause_waits_for_enter_between_activities() {
    let mut console = console("1\n\n5\n", true);
    MainMenu::default().run(&mut console).unwrap();
    let out = String::from_utf8(console.into_writer()).unwrap();
    assert_eq!(out.matches(">>> Press Enter to continue...").count(), 1);
    assert!(out.ends_with("Exiting program... Goodbye!\n"));
}

#[test]
fn test_grade_evaluator_pass() {
    let (result, out) = run_session("2\n85\n90\n78\n95\n5\n");
    assert!(result.is_ok());
    assert!(out.contains("Enter Prelim Grade: "));
    assert!(out.contains("Enter Midterm Grade: "));
    assert!(out.contains("Enter PreFinal Grade: "));
    assert!(out.contains("Enter Final Grade: "));
    assert!(out.contains("Passing grade: 80\n"));
    assert!(out.contains("Your average: 87\n"));
    assert!(out.contains("PASADO KA BOI!!"));
    assert!(!out.contains("BAGSAK KA BOI!!"));
}

#[test]
fn test_grade_evaluator_fail_with_bad_input() {
    let (result, out) = run_session("2\n70\nabc\n101\n-1\n70\n70\n70\n5\n");
    assert!(result.is_ok());
    assert_eq!(out.matches("[ERROR] Invalid input! Try again.").count(), 1);
    assert_eq!(
        out.matches("[ERROR] Value must be between 0 and 100. Try again.").count(),
        2
    );
    assert!(out.contains("Your average: 70\n"));
    assert!(out.contains("BAGSAK KA BOI!!"));
}

#[test]
fn test_grade_evaluator_fractional_average() {
    let (result, out) = run_session("2\n80\n80\n80\n79\n5\n");
    assert!(result.is_ok());
    assert!(out.contains("Your average: 79.75\n"));
    assert!(out.contains("BAGSAK KA BOI!!"));
}

#[test]
fn test_triangle_activity_shapes() {
    let (result, out) = run_session("3\n1\n3\n2\n2\n4\n5\n");
    assert!(result.is_ok());
    assert!(out.contains(">>> ===== Triangle Loop Activity ===== <<<"));
    assert!(out.contains("Right Triangle:\n*\n**\n***\n"));
    assert!(out.contains("Inverted Triangle:\n**\n*\n"));
    assert!(out.contains("Exiting Triangle Activity...\n"));
    assert!(out.contains("Successfully Navigated to Main Menu\n"));
}

#[test]
fn test_triangle_height_bounds() {
    let (result, out) = run_session("3\n3\n21\n0\n1\n4\n5\n");
    assert!(result.is_ok());
    assert_eq!(out.matches("[ERROR] Choice must be 1-20. Try again.").count(), 2);
    assert!(out.contains("Right Triangle:\n*\n\nInverted Triangle:\n*\n"));
}

#[test]
fn test_currency_exchange_from_menu() {
    let (result, out) = run_session("4\n1\n1000\ny\n3\n5\n");
    assert!(result.is_ok());
    assert!(out.contains("Enter amount in PHP (₱): "));
    assert!(out.contains("A 5% transaction fee will be charged for the exchange.\n"));
    assert!(out.contains("Would you like to proceed? (y/n): "));
    assert!(out.contains(">>> ===== Conversion Result ===== <<<"));
    assert!(out.contains("Net Amount        : ₱950.00\n"));
    assert!(out.contains("Exiting Currency Exchange Calculator...\n"));
}

#[test]
fn test_input_closed_mid_session() {
    let (result, out) = run_session("1\n");
    assert!(matches!(result, Err(AppError::InputClosed)));
    assert!(out.contains("Name: Alberto Jr Deniros\n"));
}
