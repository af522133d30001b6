use picolog::Level;
use picolog::fmt::BaseColor;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert!(Level::Error < Level::Fatal);
}

#[test]
fn level_default_is_debug() {
    assert_eq!(Level::default(), Level::Debug);
}

#[test]
fn level_labels() {
    assert_eq!(Level::Debug.label(), "DEBUG");
    assert_eq!(Level::Info.label(), "INFO");
    assert_eq!(Level::Warn.label(), "WARNING");
    assert_eq!(Level::Error.label(), "ERROR");
    assert_eq!(Level::Fatal.label(), "FATAL");
}

#[test]
fn level_colors() {
    assert_eq!(Level::Debug.color(), BaseColor::Cyan);
    assert_eq!(Level::Info.color(), BaseColor::Blue);
    assert_eq!(Level::Warn.color(), BaseColor::Yellow);
    assert_eq!(Level::Error.color(), BaseColor::Red);
    assert_eq!(Level::Fatal.color(), BaseColor::Magenta);
}

#[test]
fn level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("DBG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("FATAL".parse::<Level>().unwrap(), Level::Fatal);
    assert!("trace".parse::<Level>().is_err());
}

#[test]
fn level_display_and_u8() {
    for level in Level::all() {
        assert_eq!(level.to_string(), level.as_str());
        assert_eq!(Level::from_u8(level as u8), Some(level));
    }
    assert_eq!(Level::from_u8(5), None);
}
