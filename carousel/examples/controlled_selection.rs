use carousel::{ControlledIndex, SyncState};

fn main() {
    // Simulate a parent component that owns the selected image URL.
    let mut parent_value: Option<String> = None;
    let mut idx = ControlledIndex::new();

    let images = vec![
        "https://cdn.example.com/cars/front.jpg".to_string(),
        "https://cdn.example.com/cars/side.jpg".to_string(),
        "https://cdn.example.com/cars/interior.jpg".to_string(),
    ];

    // First non-empty list without a parent value selects the first item.
    if let Some(v) = idx.set_items(images) {
        parent_value = Some(v);
    }
    // The parent re-renders and echoes the value back; the echo is absorbed.
    idx.on_external_value(parent_value.clone());
    println!("state={:?} index={:?}", idx.state(), idx.internal_index());

    // Thumbnail click.
    if let Some(v) = idx.navigate_to(2) {
        parent_value = Some(v);
    }
    assert_eq!(idx.state(), SyncState::Pending);
    idx.on_external_value(parent_value.clone());
    println!("state={:?} index={:?}", idx.state(), idx.internal_index());

    // The parent supplies a value that only loosely matches an item.
    idx.on_external_value(Some("SIDE.JPG".to_string()));
    println!("fuzzy match -> index={:?}", idx.internal_index());
}
