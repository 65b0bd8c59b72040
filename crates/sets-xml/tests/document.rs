use proptest::prelude::*;
use sets_model::Set;
use sets_xml::{
    DocumentError, build_document, document_to_string, write_document, write_document_file,
};

fn set(id: &str, barcodes: &[&str]) -> Set {
    Set::new(id, barcodes.iter().map(|value| (*value).to_string()).collect())
}

#[test]
fn renders_sets_with_primary_first_barcode() {
    let sets = vec![
        set("SET-0001", &["1234567", "2234567"]),
        set("SET-0002", &["3334567"]),
    ];
    let document = build_document(&sets).expect("build document");
    let xml = document_to_string(&document).expect("serialize");
    insta::assert_snapshot!(xml);
}

#[test]
fn renders_exact_layout() {
    let document = build_document(&[set("ID1-0001", &["BC1-0001", "BC2-0002"])])
        .expect("build document");
    let xml = document_to_string(&document).expect("serialize");
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <sets>\n\
         \x20 <set id=\"ID1-0001\">\n\
         \x20   <items>\n\
         \x20     <barcode primary=\"true\">BC1-0001</barcode>\n\
         \x20     <barcode>BC2-0002</barcode>\n\
         \x20   </items>\n\
         \x20 </set>\n\
         </sets>\n"
    );
}

#[test]
fn empty_set_keeps_empty_items() {
    let document = build_document(&[set("SET-0001", &[])]).expect("build document");
    assert_eq!(document.sets()[0].items().len(), 0);
    let xml = document_to_string(&document).expect("serialize");
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <sets>\n\
         \x20 <set id=\"SET-0001\">\n\
         \x20   <items/>\n\
         \x20 </set>\n\
         </sets>\n"
    );
}

#[test]
fn no_sets_renders_empty_root() {
    let document = build_document(&Vec::<Set>::new()).expect("build document");
    assert_eq!(
        document_to_string(&document).expect("serialize"),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<sets/>\n"
    );
}

#[test]
fn special_characters_are_escaped() {
    let document = build_document(&[set("SET<&>01", &["12&34567"])]).expect("build document");
    let xml = document_to_string(&document).expect("serialize");
    assert!(xml.contains("<set id=\"SET&lt;&amp;&gt;01\">"));
    assert!(xml.contains(">12&amp;34567</barcode>"));
}

#[test]
fn quotes_in_text_are_written_as_is() {
    let document =
        build_document(&[set("SET'0\"01", &["1234'567", "22\"34567"])]).expect("build document");
    let xml = document_to_string(&document).expect("serialize");
    assert!(xml.contains("<set id=\"SET'0&quot;01\">"));
    assert!(xml.contains("<barcode primary=\"true\">1234'567</barcode>"));
    assert!(xml.contains("<barcode>22\"34567</barcode>"));
}

#[test]
fn write_failure_keeps_io_source() {
    struct FailingWriter;

    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let document = build_document(&[set("SET-0001", &["1234567"])]).expect("build document");
    let error = write_document(&document, FailingWriter).unwrap_err();
    assert!(matches!(error, DocumentError::Write(_)));
    let source = std::error::Error::source(&error).expect("io source");
    assert_eq!(source.to_string(), "disk full");
}

#[test]
fn control_character_in_id_is_malformed() {
    let error = build_document(&[set("SET\u{0}0001", &["1234567"])]).unwrap_err();
    assert!(matches!(
        error,
        DocumentError::InvalidCharacter { field: "set id", code: 0, position: 4, .. }
    ));
}

#[test]
fn writes_file_and_overwrites() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sets.xml");
    std::fs::write(&path, "stale").expect("seed file");

    let document = build_document(&[set("SET-0001", &["1234567"])]).expect("build document");
    write_document_file(&document, &path).expect("write file");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, document_to_string(&document).expect("serialize"));
}

fn sets_strategy() -> impl Strategy<Value = Vec<Set>> {
    prop::collection::vec(
        ("[A-Z0-9-]{7,10}", prop::collection::vec("[0-9]{7,13}", 0..5)),
        0..8,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, barcodes)| Set::new(id, barcodes))
            .collect()
    })
}

proptest! {
    #[test]
    fn exactly_first_barcode_is_primary(sets in sets_strategy()) {
        let document = build_document(&sets).expect("build document");
        for node in document.sets() {
            for (index, item) in node.items().iter().enumerate() {
                prop_assert_eq!(item.is_primary(), index == 0);
            }
        }
        let xml = document_to_string(&document).expect("serialize");
        let non_empty = sets.iter().filter(|set| !set.barcodes().is_empty()).count();
        prop_assert_eq!(xml.matches("primary=\"true\"").count(), non_empty);
    }

    #[test]
    fn serialization_is_deterministic(sets in sets_strategy()) {
        let first = document_to_string(&build_document(&sets).expect("build")).expect("serialize");
        let second = document_to_string(&build_document(&sets).expect("build")).expect("serialize");
        prop_assert_eq!(first, second);
    }
}
