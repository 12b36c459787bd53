use super::*;
use crate::net::types::OrderUser;

fn order_for(nombre: &str, email: &str) -> Order {
    Order {
        id: email.to_owned(),
        user: Some(OrderUser {
            nombre: nombre.to_owned(),
            email: email.to_owned(),
        }),
        ..Order::default()
    }
}

#[test]
fn empty_search_keeps_everything() {
    let orders = vec![order_for("Ana", "ana@uni.edu"), order_for("Beto", "beto@uni.edu")];
    assert_eq!(filter_orders(orders, "").len(), 2);
}

#[test]
fn matches_name_and_email_case_insensitively() {
    let orders = vec![order_for("Ana García", "ana@uni.edu"), order_for("Beto", "beto@uni.edu")];
    assert_eq!(filter_orders(orders.clone(), "garcía").len(), 1);
    assert_eq!(filter_orders(orders, "BETO@").len(), 1);
}

#[test]
fn orders_without_buyer_never_match() {
    let mut orphan = order_for("x", "x");
    orphan.user = None;
    assert!(filter_orders(vec![orphan], "x").is_empty());
}
