// tests/pipeline.rs
//
// Filter + column gate + status grouping, without UI.
//
use board_cards::engine::{self, column_names, extract, group, known_assignees, matches};
use board_cards::model::{CardRecord, FilterCriteria, RawFilters};

fn card(id: &str, status: &str) -> CardRecord {
    CardRecord::new(id, status)
}

fn criteria(f: impl FnOnce(&mut RawFilters)) -> FilterCriteria {
    let mut raw = RawFilters::default();
    f(&mut raw);
    FilterCriteria::from_raw(&raw)
}

fn ids(cards: &[CardRecord]) -> Vec<&str> {
    cards.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn groups_follow_status_order_unknown_last() {
    let cards = vec![
        card("1", "Fechado"),
        card("2", "Novo"),
        card("3", "UnknownX"),
        card("4", "Aberto"),
    ];
    let selected = ["Fechado", "Novo", "UnknownX", "Aberto"];
    let grouped = group(&cards, &selected);
    assert_eq!(grouped.statuses(), vec!["Novo", "Aberto", "Fechado", "UnknownX"]);
}

#[test]
fn unknown_statuses_keep_encounter_order() {
    let cards = vec![card("1", "Zeta"), card("2", "Alpha"), card("3", "Novo")];
    let grouped = group(&cards, &["Zeta", "Alpha", "Novo"]);
    assert_eq!(grouped.statuses(), vec!["Novo", "Zeta", "Alpha"]);
}

#[test]
fn unset_criteria_partition_selected_cards() {
    let cards = vec![
        card("1", "Novo"),
        card("2", "Aberto"),
        card("3", "Novo"),
        card("4", "Fechado"),
        card("5", "Pendente"),
    ];
    let selected = ["Novo", "Fechado"];
    let grouped = extract(&cards, &FilterCriteria::default(), &selected);

    assert_eq!(grouped.card_count(), 3);
    assert_eq!(ids(grouped.get("Novo").unwrap()), vec!["1", "3"]);
    assert_eq!(ids(grouped.get("Fechado").unwrap()), vec!["4"]);
    assert!(grouped.get("Aberto").is_none());
    // Every card lands in the group named after its own status.
    for g in &grouped {
        assert!(!g.cards.is_empty());
        assert!(g.cards.iter().all(|c| c.status == g.status));
    }
}

#[test]
fn nothing_selected_means_nothing_extracted() {
    let cards = vec![card("1", "Novo")];
    let none: [&str; 0] = [];
    assert!(extract(&cards, &FilterCriteria::default(), &none).is_empty());
    assert!(group(&[], &none).is_empty());
}

#[test]
fn text_filters_are_case_insensitive_substrings() {
    let mut c = card("4711", "Novo");
    c.assigned_to = "Ana Souza".into();
    c.client = "ACME Ltda".into();
    c.effort = "8h".into();

    assert!(matches(&c, &criteria(|f| f.name = "  souza ".into())));
    assert!(matches(&c, &criteria(|f| f.client = "acme".into())));
    assert!(matches(&c, &criteria(|f| f.id = "71".into())));
    assert!(matches(&c, &criteria(|f| f.effort = "8H".into())));
    assert!(!matches(&c, &criteria(|f| f.client = "globex".into())));
    // Every set criterion must hold.
    assert!(!matches(&c, &criteria(|f| {
        f.name = "ana".into();
        f.id = "999".into();
    })));
}

#[test]
fn empty_field_never_matches_a_needle() {
    let c = card("1", "Novo");
    assert!(!matches(&c, &criteria(|f| f.client = "a".into())));
    assert!(!matches(&c, &criteria(|f| f.effort = "1".into())));
    // Whitespace-only input is unset.
    assert!(matches(&c, &criteria(|f| f.client = "   ".into())));
}

#[test]
fn tags_need_every_token_in_any_order() {
    let mut both = card("1", "Novo");
    both.tags = vec!["B".into(), "urgente".into(), "A".into()];
    let mut one = card("2", "Novo");
    one.tags = vec!["a".into()];

    let want = criteria(|f| f.tags = "a, b".into());
    assert_eq!(want.tags, vec!["a", "b"]);
    assert!(matches(&both, &want));
    assert!(!matches(&one, &want));

    // Tags compare whole, not as substrings.
    let partial = criteria(|f| f.tags = "urg".into());
    assert!(!matches(&both, &partial));
}

#[test]
fn empty_tag_tokens_are_dropped() {
    let crit = criteria(|f| f.tags = "a,, ,".into());
    assert_eq!(crit.tags, vec!["a"]);
    assert!(criteria(|f| f.tags = " , ".into()).is_unset());
}

#[test]
fn extract_applies_filters_before_grouping() {
    let mut a = card("1", "Novo");
    a.client = "ACME".into();
    let mut b = card("2", "Aberto");
    b.client = "Globex".into();
    let mut c = card("3", "Aberto");
    c.client = "acme sul".into();

    let cards = vec![a, b, c];
    let grouped = extract(&cards, &criteria(|f| f.client = "acme".into()), &["Novo", "Aberto"]);
    assert_eq!(grouped.statuses(), vec!["Novo", "Aberto"]);
    assert_eq!(ids(&grouped.all_cards()), vec!["1", "3"]);
}

#[test]
fn column_names_and_assignees() {
    let mut a = card("1", "Fechado");
    a.assigned_to = "Bruno".into();
    let mut b = card("2", "Novo");
    b.assigned_to = "Ana".into();
    let c = card("3", "Fechado");

    let cards = vec![a, b, c];
    assert_eq!(column_names(&cards), vec!["Novo", "Fechado"]);
    assert_eq!(known_assignees(&cards), vec!["Ana", "Bruno", "Não Atribuído"]);
}

#[test]
fn status_rank_orders_known_before_unknown() {
    assert!(engine::status_rank("Novo") < engine::status_rank("Fechado"));
    assert_eq!(engine::status_rank("Whatever"), engine::status_rank("Other"));
    let mut v = vec!["X", "Resolvido", "Pendente"];
    engine::sort_statuses(&mut v);
    assert_eq!(v, vec!["Pendente", "Resolvido", "X"]);
}
