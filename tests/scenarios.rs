use sepjoin::{
    join::{JoinExt, Strategy, format_joined, print_joined, write_joined},
    lazy::squares,
    parsing::parse_list,
    range::{Counter, SliceCursor, Span, write_span},
    style::{Style, Terminator},
};

const DELIMITER: &str = " , ";

fn all_strategies<I>(items: I) -> String
where
    I: IntoIterator + Clone,
    I::Item: std::fmt::Display,
{
    let renderings = Strategy::ALL
        .iter()
        .map(|strategy| {
            let mut out = String::new();
            write_joined(&mut out, items.clone(), DELIMITER, *strategy).unwrap();
            out
        })
        .collect::<Vec<_>>();
    assert!(renderings.windows(2).all(|w| w[0] == w[1]));
    renderings[0].clone()
}

#[test]
fn integers() {
    assert_eq!(all_strategies([1, 2, 3, 4, 5]), "1 , 2 , 3 , 4 , 5");
}

#[test]
fn empty() {
    assert_eq!(all_strategies(Vec::<i32>::new()), "");
}

#[test]
fn floats() {
    assert_eq!(all_strategies([1.1, 2.2, 3.3]), "1.1 , 2.2 , 3.3");
}

#[test]
fn single_element() {
    assert_eq!(all_strategies(["<END>"]), "<END>");
}

#[test]
fn cursor_pair_matches_container() {
    let xs = vec![1, 2, 3];
    let mut via_cursors = String::new();
    write_span(
        &mut via_cursors,
        SliceCursor::begin(&xs),
        SliceCursor::end(&xs),
        DELIMITER,
    )
    .unwrap();
    assert_eq!(via_cursors, format_joined(&xs, DELIMITER).unwrap());
    assert_eq!(
        via_cursors,
        format_joined(Span::new(Counter::new(1), Counter::new(4)), DELIMITER).unwrap()
    );
}

#[test]
fn all_interfaces_agree() {
    let xs = parse_list("[1, 2.5, \"a b\"]").unwrap();
    let expected = "1 , 2.5 , a b";

    assert_eq!(format_joined(&xs, DELIMITER).unwrap(), expected);
    assert_eq!(xs.iter().joined(DELIMITER).to_string(), expected);
    assert_eq!(Style::new(DELIMITER).render(&xs).unwrap(), expected);

    let mut sink = Vec::new();
    print_joined(&mut sink, &xs, DELIMITER).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), expected);
}

#[test]
fn lazy_sequence_to_stdout_style() {
    let mut sink = Vec::new();
    Style::new(DELIMITER)
        .terminator(Terminator::NonEmpty)
        .print(&mut sink, squares(4))
        .unwrap();
    assert_eq!(sink, b"0 , 1 , 4 , 9\n");
}
