use super::*;

fn book(name: &str, price: f64, pages: u32) -> Product {
    Product {
        id: name.to_owned(),
        name: name.to_owned(),
        price,
        pages,
        ..Product::default()
    }
}

#[test]
fn search_is_case_insensitive() {
    let products = vec![book("Anatomía Humana", 10.0, 100), book("Física", 20.0, 50)];
    let found = apply_filters(products, "anato", SortBy::All);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Anatomía Humana");
}

#[test]
fn sorts_by_price_both_ways() {
    let products = vec![book("a", 30.0, 1), book("b", 10.0, 2), book("c", 20.0, 3)];
    let asc = apply_filters(products.clone(), "", SortBy::PriceLow);
    assert_eq!(asc.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), ["b", "c", "a"]);
    let desc = apply_filters(products, "", SortBy::PriceHigh);
    assert_eq!(desc.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), ["a", "c", "b"]);
}

#[test]
fn sorts_by_pages() {
    let products = vec![book("a", 1.0, 300), book("b", 1.0, 100)];
    let asc = apply_filters(products, "", SortBy::PagesLow);
    assert_eq!(asc[0].name, "b");
}

#[test]
fn default_order_is_preserved() {
    let products = vec![book("z", 9.0, 9), book("a", 1.0, 1)];
    let kept = apply_filters(products, "", SortBy::All);
    assert_eq!(kept[0].name, "z");
}
