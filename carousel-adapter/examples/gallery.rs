use carousel_adapter::Gallery;

fn main() {
    // Example: an image gallery whose selected image is owned by the parent page.
    let mut parent: Option<String> = None;
    let mut g = Gallery::new(4).expect("valid visible count");

    let images: Vec<String> = (1..=8).map(|i| format!("listing-42/photo-{i}.jpg")).collect();
    if let Some(v) = g.set_items(images) {
        parent = Some(v);
    }
    g.on_external_value(parent.clone());

    // Thumbnail clicks and arrow keys emit values; the parent echoes them back.
    for _ in 0..5 {
        if let Some(v) = g.next() {
            parent = Some(v);
        }
        g.on_external_value(parent.clone());
        println!(
            "selected={:?} strip_range={:?}",
            g.selected(),
            g.strip().visible_range()
        );
    }

    // Parent navigates on its own, e.g. from a URL fragment.
    g.on_external_value(Some("PHOTO-2.JPG".to_string()));
    println!(
        "from parent: selected={:?} strip_offset={}",
        g.selected_index(),
        g.strip().offset()
    );
}
