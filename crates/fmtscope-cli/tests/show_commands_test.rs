mod common;
use common::TestFixture;

#[test]
fn input_prints_the_source_verbatim() {
    let fixture = TestFixture::new();
    let (stdout, _) = fixture.run(&["input"]);
    assert_eq!(stdout, "int x=1;int yy=22;\n");
}

#[test]
fn output_prints_the_formatted_result_verbatim() {
    let fixture = TestFixture::new();
    let (stdout, _) = fixture.run(&["output"]);
    assert_eq!(stdout, "int x\n    = 1;\nint yy = 22;\n");
}

#[test]
fn ops_render_as_one_flowing_line() {
    let fixture = TestFixture::new();
    let (stdout, _) = fixture.run(&["ops"]);
    // Tokens keep their surrounding text verbatim; breaks show fill mode,
    // with `?` marking conditional ones.
    insta::assert_snapshot!(stdout, @"«open»int x«B:UNIFIED»= «B?:INDEPENDENT»1;«close»");
}

#[test]
fn ops_detail_lists_producer_summaries() {
    let fixture = TestFixture::new();
    let (stdout, _) = fixture.run(&["ops", "--detail"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "«open» OpenOp{plusIndent=Const{0}}");
    assert!(lines.contains(&"«B:UNIFIED» Break{fillMode=UNIFIED}"));
    assert!(lines.contains(&"«B?:INDEPENDENT» Break{conditional, fillMode=INDEPENDENT}"));
    assert_eq!(lines.last(), Some(&"«close»"));
}

#[test]
fn doc_renders_nested_blocks() {
    let fixture = TestFixture::new();
    let (stdout, _) = fixture.run(&["doc"]);
    let expected = "\
▸
  int x
  ▸ [+4] (if broken(7) then +4 else +0) \"assignment\" preferBreakingLastInnerLevel
    ⏎#7
    = 1;
  ⏎
  int yy⏎( )#7= 22;
";
    assert_eq!(stdout, expected);
}

#[test]
fn doc_elides_the_empty_level() {
    let fixture = TestFixture::new();
    let (stdout, _) = fixture.run(&["doc"]);
    // Level 130 has an empty flat rendering; its contents never appear.
    assert!(!stdout.contains("ghost"));
    let (inline, _) = fixture.run(&["doc", "--inline"]);
    assert!(!inline.contains("ghost"));
}

#[test]
fn doc_tags_both_breaks_sharing_the_conditional_indent() {
    let fixture = TestFixture::new();
    let (stdout, _) = fixture.run(&["doc"]);
    assert_eq!(stdout.matches("#7").count(), 2, "{}", stdout);
}

#[test]
fn inline_doc_reconstructs_the_formatted_output() {
    let fixture = TestFixture::new();
    let (inline, _) = fixture.run(&["doc", "--inline"]);
    let (output, _) = fixture.run(&["output"]);
    assert_eq!(inline, output);
}

#[test]
fn decisions_show_the_accepted_path_expanded() {
    let fixture = TestFixture::new();
    let (stdout, _) = fixture.run(&["decisions"]);
    let expected = "\
▾ Explore * (0)
  ▾ assignment * (Node ID: 1, Level ID: 110)
    ▸ fit on one line (2)
    · break last inner level * +4 (3)
";
    assert_eq!(stdout, expected);
}

#[test]
fn decisions_full_expands_rejected_explorations_too() {
    let fixture = TestFixture::new();
    let (stdout, _) = fixture.run(&["decisions", "--full"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], "    ▾ fit on one line (2)");
    assert_eq!(lines[3], "      · 4 (Node ID: 4, Level ID: 130)");
}

#[test]
fn rendering_is_deterministic() {
    let fixture = TestFixture::new();
    for args in [
        &["report"][..],
        &["ops"],
        &["doc"],
        &["doc", "--inline"],
        &["decisions", "--full"],
    ] {
        let (first, _) = fixture.run(args);
        let (second, _) = fixture.run(args);
        assert_eq!(first, second, "{:?} output changed between runs", args);
    }
}
