//! Integration tests for the translation pipeline.

mod common;

use common::{args_of, options, translate_str, translate_with, INVOKING_SHELL};
use service2run::identity::IdentityError;
use service2run::{render, TranslateError};

fn strs(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}

// =============================================================================
// SECTION HANDLING
// =============================================================================

#[test]
fn empty_input_yields_program_and_empty_command() {
    assert_eq!(strs(&args_of("")), vec!["systemd-run", ""]);
}

#[test]
fn input_without_service_section_emits_nothing() {
    let unit = "[Unit]\nDescription=demo\n\n[Install]\nWantedBy=multi-user.target\n";
    assert_eq!(strs(&args_of(unit)), vec!["systemd-run", ""]);
}

#[test]
fn only_service_section_is_translated() {
    let unit = "\
[Unit]
Description=demo
After=network.target

[Service]
Nice=5
WorkingDirectory=/srv

[Install]
WantedBy=default.target
";
    assert_eq!(
        strs(&args_of(unit)),
        vec!["systemd-run", "-p", "Nice=5", "-p", "WorkingDirectory=/srv", ""]
    );
}

#[test]
fn reading_stops_at_next_section_even_if_service_repeats() {
    let unit = "\
[Service]
Nice=1
[Install]
WantedBy=default.target
[Service]
Nice=2
";
    assert_eq!(strs(&args_of(unit)), vec!["systemd-run", "-p", "Nice=1", ""]);
}

#[test]
fn unknown_user_after_section_end_is_never_resolved() {
    let unit = "[Service]\nNice=1\n[X-Extra]\nUser=ghost\n";
    assert!(translate_str(unit).is_ok());
}

// =============================================================================
// GENERIC DIRECTIVES AND EXCLUSIONS
// =============================================================================

#[test]
fn generic_directives_keep_order_and_text() {
    let unit = "\
[Service]
Environment=FOO=bar
Foo=1
ProtectSystem=strict
";
    assert_eq!(
        strs(&args_of(unit)),
        vec![
            "systemd-run",
            "-p",
            "Environment=FOO=bar",
            "-p",
            "Foo=1",
            "-p",
            "ProtectSystem=strict",
            ""
        ]
    );
}

#[test]
fn exec_and_restart_directives_are_dropped() {
    let unit = "\
[Service]
Type=oneshot
ExecStartPre=/bin/mkdir -p /run/demo
ExecStart=/usr/bin/demo --serve
ExecStop=/bin/kill $MAINPID
Restart=on-failure
RestartSec=5
";
    assert_eq!(strs(&args_of(unit)), vec!["systemd-run", "-p", "Type=oneshot", ""]);
}

#[test]
fn configured_prefixes_are_dropped_too() {
    let opts = options().with_excluded_prefixes(vec!["Timeout".to_string()]);
    let unit = "[Service]\nTimeoutStartSec=5\nNice=3\nExecStart=/bin/true\n";
    let inv = translate_with(unit, &opts).unwrap();
    assert_eq!(strs(inv.args()), vec!["systemd-run", "-p", "Nice=3", ""]);
}

#[test]
fn comments_and_blank_lines_emit_nothing() {
    let unit = "\
[Service]
# Nice=10

; Nice=11
Nice=12
";
    assert_eq!(strs(&args_of(unit)), vec!["systemd-run", "-p", "Nice=12", ""]);
}

#[test]
fn program_name_is_configurable() {
    let opts = options().with_program("/usr/bin/systemd-run");
    let inv = translate_with("[Service]\nNice=1\n", &opts).unwrap();
    assert_eq!(inv.program(), "/usr/bin/systemd-run");
}

// =============================================================================
// LINE CONTINUATION
// =============================================================================

#[test]
fn continued_line_equals_unsplit_line() {
    let split = "[Service]\nEnvironment=A=1 \\\nB=2\n";
    let whole = "[Service]\nEnvironment=A=1 B=2\n";
    assert_eq!(args_of(split), args_of(whole));
}

#[test]
fn continuation_inserts_no_whitespace() {
    let unit = "[Service]\nDescription=ab\\\ncd\n";
    assert_eq!(strs(&args_of(unit)), vec!["systemd-run", "-p", "Description=abcd", ""]);
}

#[test]
fn continued_exec_line_is_dropped_whole() {
    let unit = "[Service]\nExecStart=/usr/bin/demo \\\n  --flag\nNice=1\n";
    assert_eq!(strs(&args_of(unit)), vec!["systemd-run", "-p", "Nice=1", ""]);
}

#[test]
fn dangling_continuation_at_eof_is_discarded() {
    let unit = "[Service]\nNice=1\nDescription=never finished\\";
    assert_eq!(strs(&args_of(unit)), vec!["systemd-run", "-p", "Nice=1", ""]);
}

#[test]
fn dangling_continuation_before_next_section_is_discarded() {
    let unit = "[Service]\nDescription=half\\\n[Install]\nWantedBy=x\n";
    assert_eq!(strs(&args_of(unit)), vec!["systemd-run", ""]);
}

#[test]
fn crlf_line_endings_are_trimmed() {
    let unit = "[Service]\r\nNice=4\r\n";
    assert_eq!(strs(&args_of(unit)), vec!["systemd-run", "-p", "Nice=4", ""]);
}

// =============================================================================
// IDENTITY TRANSFORMS
// =============================================================================

#[test]
fn user_with_login_shell_uses_systemd_run_shell() {
    let inv = translate_str("[Service]\nUser=alice\n").unwrap();
    assert_eq!(strs(inv.args()), vec!["systemd-run", "--uid", "1000", "--shell", ""]);
    assert_eq!(inv.command_override(), None);
}

#[test]
fn user_with_nologin_shell_runs_invoking_shell() {
    let inv = translate_str("[Service]\nUser=nobody\n").unwrap();
    assert_eq!(
        strs(inv.args()),
        vec!["systemd-run", "--uid", "65534", "--pty", "--wait", "--collect", INVOKING_SHELL]
    );
    assert_eq!(inv.command_override(), Some(INVOKING_SHELL));
}

#[test]
fn group_resolves_through_group_database() {
    // "wheel" exists only as a group, "alice" only as an account.
    let inv = translate_str("[Service]\nGroup=wheel\n").unwrap();
    assert_eq!(strs(inv.args()), vec!["systemd-run", "--gid", "10", ""]);

    let err = translate_str("[Service]\nGroup=alice\n").unwrap_err();
    assert!(matches!(
        err,
        TranslateError::Identity(IdentityError::GroupNotFound { ref name }) if name == "alice"
    ));
}

#[test]
fn unknown_user_aborts_translation() {
    let err = translate_str("[Service]\nNice=1\nUser=ghost\n").unwrap_err();
    assert!(matches!(
        err,
        TranslateError::Identity(IdentityError::AccountNotFound { ref name }) if name == "ghost"
    ));
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn dynamic_user_runs_invoking_shell_whatever_the_value() {
    for value in ["yes", "no", "true", ""] {
        let inv = translate_str(&format!("[Service]\nDynamicUser={value}\n")).unwrap();
        assert_eq!(inv.command_override(), Some(INVOKING_SHELL), "value {value:?}");
        assert_eq!(inv.args().last().map(String::as_str), Some(INVOKING_SHELL));
    }
}

/// The property and the first flag must stay two arguments; a fused
/// `DynamicUser=true--pty` is not a valid property assignment.
#[test]
fn dynamic_user_flags_are_separate_arguments() {
    let args = args_of("[Service]\nDynamicUser=yes\n");
    assert_eq!(
        strs(&args),
        vec!["systemd-run", "-p", "DynamicUser=true", "--pty", "--wait", "--collect", INVOKING_SHELL]
    );
    assert!(!args.iter().any(|a| a == "DynamicUser=true--pty"));
}

#[test]
fn two_overrides_leave_one_trailing_command() {
    let opts = options();
    let unit = "[Service]\nUser=nobody\nDynamicUser=yes\n";
    let inv = translate_with(unit, &opts).unwrap();
    assert_eq!(inv.command_override(), Some(INVOKING_SHELL));
    assert_eq!(inv.args().iter().filter(|a| *a == INVOKING_SHELL).count(), 1);
}

#[test]
fn user_and_group_are_case_sensitive() {
    let args = args_of("[Service]\nuser=ghost\ngroup=ghost\n");
    assert_eq!(
        strs(&args),
        vec!["systemd-run", "-p", "user=ghost", "-p", "group=ghost", ""]
    );
}

// =============================================================================
// END TO END
// =============================================================================

#[test]
fn service_with_nologin_user_end_to_end() {
    let unit = "\
[Service]
User=nobody
ExecStart=/bin/true
Environment=FOO=bar
[Install]
WantedBy=default.target
";
    let inv = translate_str(unit).unwrap();
    assert_eq!(
        strs(inv.args()),
        vec![
            "systemd-run",
            "--uid",
            "65534",
            "--pty",
            "--wait",
            "--collect",
            "-p",
            "Environment=FOO=bar",
            INVOKING_SHELL
        ]
    );

    let line = render(&inv).unwrap();
    assert!(line.starts_with("systemd-run --uid 65534 --pty --wait --collect "));
    assert!(line.ends_with(INVOKING_SHELL));
    assert!(!line.contains("ExecStart"));
    assert!(!line.contains("WantedBy"));
    assert_eq!(shlex::split(&line).unwrap(), inv.into_args());
}

#[test]
fn rendered_line_omits_empty_trailing_command() {
    let inv = translate_str("[Service]\nUser=alice\n").unwrap();
    assert_eq!(render(&inv).unwrap(), "systemd-run --uid 1000 --shell");
}
