use clap::Parser;
use std::path::PathBuf;
use studynotes::cli::args::{Args, Command};
use studynotes::domain::SortCriterion;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["studynotes", "notes.json"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_generate_command_when_parsing_then_collects_topics() {
    // Arrange
    let args = vec![
        "studynotes", "generate", "lectures", "-o", "notes.json", "-r", "-t", "cell", "--topic", "growth",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Generate {
            path,
            output,
            recursive,
            append,
            topics,
        } => {
            assert_eq!(path, PathBuf::from("lectures"));
            assert_eq!(output, Some(PathBuf::from("notes.json")));
            assert!(recursive);
            assert!(!append);
            assert_eq!(topics, vec!["cell", "growth"]);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn given_list_command_with_filters_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "studynotes", "list", "notes.json", "-s", "dog", "--tag", "Term", "--tag", "exam", "--sort", "by_tag",
        "-e", "sec-cell", "--json",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List {
            notes,
            search,
            tags,
            sort,
            expand,
            json,
        } => {
            assert_eq!(notes, PathBuf::from("notes.json"));
            assert_eq!(search.as_deref(), Some("dog"));
            assert_eq!(tags, vec!["Term", "exam"]);
            assert_eq!(sort, Some(SortCriterion::ByTag));
            assert_eq!(expand, vec!["sec-cell"]);
            assert!(json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_unknown_sort_when_parsing_then_fails() {
    // Arrange
    let args = vec!["studynotes", "list", "notes.json", "--sort", "newest"];

    // Act & Assert
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_delete_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["studynotes", "delete", "notes.json", "sec-cell", "--yes"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { notes, id, yes } => {
            assert_eq!(notes, PathBuf::from("notes.json"));
            assert_eq!(id, "sec-cell");
            assert!(yes);
        }
        _ => panic!("Expected Delete command"),
    }
    assert_eq!(parsed.config, None);
}

#[test]
fn given_tag_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["studynotes", "tag", "notes.json", "sec-cell", "exam"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Tag { id, tag, .. } => {
            assert_eq!(id, "sec-cell");
            assert_eq!(tag, "exam");
        }
        _ => panic!("Expected Tag command"),
    }
}

#[test]
fn given_global_config_flag_after_subcommand_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["studynotes", "export", "notes.json", "--open", "-c", "/tmp/config.toml"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.config, Some(PathBuf::from("/tmp/config.toml")));
    match parsed.command {
        Command::Export { open, .. } => assert!(open),
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn given_verbose_flags_when_parsing_then_counts_occurrences() {
    // Arrange
    let args = vec!["studynotes", "-vv", "tags", "notes.json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
    assert!(matches!(parsed.command, Command::Tags { .. }));
}
