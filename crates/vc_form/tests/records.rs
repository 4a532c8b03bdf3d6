use std::collections::BTreeMap;

use vc_form::{DecodeError, ErrorCategory, Form, FormCodec, Value};

#[derive(Form, Default, Debug, PartialEq)]
struct Person {
    name: String,
    #[form("age,omitempty")]
    age: i32,
    #[form("email")]
    email_address: String,
    active: bool,
}

#[derive(Form, Default, Debug, PartialEq)]
struct Address {
    street: String,
    city: String,
}

#[derive(Form, Default, Debug, PartialEq)]
struct ComplexPerson {
    name: String,
    tags: Vec<String>,
    address: Address,
    scores: BTreeMap<String, i64>,
    nickname: Option<String>,
    manager: Option<Box<Person>>,
}

#[derive(Form, Default, Debug, PartialEq)]
struct IgnoredFields {
    #[form("public")]
    public: String,
    #[form("-")]
    secret: String,
    #[form(",ignore")]
    internal: String,
    #[form("")]
    no_tag: String,
    #[form(",omitempty")]
    blank: String,
}

#[derive(Form, Default, Debug, PartialEq)]
struct Numbers {
    i8: i8,
    u8: u8,
    i64: i64,
    u64: u64,
    f32: f32,
    f64: f64,
    flag: bool,
    letter: char,
}

#[derive(Form, Default, Debug, PartialEq)]
struct Keyword {
    r#type: String,
}

#[derive(Form, Default, Debug, PartialEq)]
struct Page<T> {
    items: Vec<T>,
    total: u32,
}

#[test]
fn decode_flat_record() {
    let person: Person = vc_form::from_str("name=John&age=30&email=john%40example.com&active=true").unwrap();
    assert_eq!(
        person,
        Person {
            name: "John".into(),
            age: 30,
            email_address: "john@example.com".into(),
            active: true,
        }
    );
}

#[test]
fn encode_flat_record() {
    let person = Person {
        name: "John Doe".into(),
        age: 0,
        email_address: "j@d.org".into(),
        active: false,
    };
    assert_eq!(
        vc_form::to_string(&person).unwrap(),
        "active=false&email=j%40d.org&name=John+Doe"
    );
}

#[test]
fn last_write_wins() {
    let person: Person = vc_form::from_str("name=john&name=jane").unwrap();
    assert_eq!(person.name, "jane");
}

#[test]
fn empty_string_is_zero() {
    let person: Person = vc_form::from_str("age=&active=&name=").unwrap();
    assert_eq!(person, Person::default());

    let numbers: Numbers = vc_form::from_str("f64=&letter=&u64=").unwrap();
    assert_eq!(numbers, Numbers::default());
}

#[test]
fn omitempty_round_trip() {
    let person = Person {
        name: "Ann".into(),
        ..Person::default()
    };
    let encoded = vc_form::to_string(&person).unwrap();
    assert!(!encoded.contains("age"));

    let decoded: Person = vc_form::from_str(&encoded).unwrap();
    assert_eq!(decoded.age, 0);
    assert_eq!(decoded, person);
}

#[test]
fn nested_record() {
    let input = "name=Ann&tags[]=a&tags[]=b&address[street]=Main&address[city]=Oslo\
                 &scores[math]=90&scores[art]=-3&nickname=annie&manager[name]=Bob&manager[age]=51";
    let person: ComplexPerson = vc_form::from_str(input).unwrap();

    assert_eq!(person.tags, ["a", "b"]);
    assert_eq!(person.address.city, "Oslo");
    assert_eq!(person.scores["math"], 90);
    assert_eq!(person.scores["art"], -3);
    assert_eq!(person.nickname.as_deref(), Some("annie"));

    let manager = person.manager.as_deref().unwrap();
    assert_eq!(manager.name, "Bob");
    assert_eq!(manager.age, 51);

    let encoded = vc_form::to_string(&person).unwrap();
    assert_eq!(
        encoded,
        "address%5Bcity%5D=Oslo&address%5Bstreet%5D=Main\
         &manager%5Bactive%5D=false&manager%5Bage%5D=51&manager%5Bemail%5D=&manager%5Bname%5D=Bob\
         &name=Ann&nickname=annie&scores%5Bart%5D=-3&scores%5Bmath%5D=90\
         &tags%5B%5D=a&tags%5B%5D=b"
    );
    assert_eq!(vc_form::from_str::<ComplexPerson>(&encoded).unwrap(), person);
}

#[test]
fn absent_optionals_are_skipped() {
    let person = ComplexPerson::default();
    let pairs = vc_form::to_pairs(&person).unwrap();
    let keys: Vec<&str> = pairs.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["address[city]", "address[street]", "name"]);
}

#[test]
fn ignored_fields() {
    let value = IgnoredFields {
        public: "visible".into(),
        secret: "hidden".into(),
        internal: "hidden".into(),
        no_tag: "value".into(),
        blank: String::new(),
    };
    assert_eq!(vc_form::to_string(&value).unwrap(), "no_tag=value&public=visible");

    for input in ["secret=x", "internal=x", "-=x"] {
        let err = vc_form::from_str::<IgnoredFields>(input).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownField { .. }), "{input}");
    }
}

#[test]
fn unknown_field_aborts() {
    let mut person = Person::default();
    let err = vc_form::decode_str("name=a&bogus=1&age=4", &mut person).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Structural);
    assert_eq!(err.key(), Some("bogus"));
    assert!(matches!(err, DecodeError::UnknownField { ref field, .. } if field == "bogus"));
    assert_eq!(person.name, "a");
    assert_eq!(person.age, 0);
}

#[test]
fn scalar_bounds() {
    let numbers: Numbers = vc_form::from_str(
        "i8=-128&u8=255&i64=-9223372036854775808&u64=18446744073709551615&f32=1.5&f64=-0&letter=%C3%A9",
    )
    .unwrap();
    assert_eq!(numbers.i8, i8::MIN);
    assert_eq!(numbers.u8, u8::MAX);
    assert_eq!(numbers.i64, i64::MIN);
    assert_eq!(numbers.u64, u64::MAX);
    assert_eq!(numbers.f32, 1.5);
    assert!(numbers.f64 == 0.0 && numbers.f64.is_sign_negative());
    assert_eq!(numbers.letter, 'é');

    for input in ["i8=128", "u64=18446744073709551616", "f32=1e39"] {
        let err = vc_form::from_str::<Numbers>(input).unwrap_err();
        assert!(
            matches!(err, DecodeError::Scalar { source: vc_form::ScalarError::OutOfRange { .. }, .. }),
            "{input}: {err}"
        );
        assert_eq!(err.category(), ErrorCategory::Type);
    }
    for input in ["i8=1.5", "u8=-1", "flag=yes", "f64=abc", "letter=ab"] {
        let err = vc_form::from_str::<Numbers>(input).unwrap_err();
        assert!(
            matches!(err, DecodeError::Scalar { source: vc_form::ScalarError::Invalid { .. }, .. }),
            "{input}: {err}"
        );
    }
}

#[test]
fn bool_literals() {
    for (text, expected) in [("1", true), ("t", true), ("TRUE", true), ("True", true), ("0", false), ("F", false)] {
        let numbers: Numbers = vc_form::from_str(&format!("flag={text}")).unwrap();
        assert_eq!(numbers.flag, expected, "{text}");
    }
}

#[test]
fn negative_zero_is_not_empty() {
    #[derive(Form, Default)]
    struct Sparse {
        #[form(",omitempty")]
        value: f64,
    }

    assert_eq!(vc_form::to_string(&Sparse { value: 0.0 }).unwrap(), "");
    assert_eq!(vc_form::to_string(&Sparse { value: -0.0 }).unwrap(), "value=-0");
}

#[test]
fn raw_identifiers() {
    let keyword: Keyword = vc_form::from_str("type=admin").unwrap();
    assert_eq!(keyword.r#type, "admin");
    assert_eq!(vc_form::to_string(&keyword).unwrap(), "type=admin");
}

#[test]
fn generic_records() {
    let page: Page<u16> = vc_form::from_str("items[]=3&items[]=4&total=2").unwrap();
    assert_eq!(page.items, [3, 4]);

    let people: Page<Person> = vc_form::from_str("items[][name]=a&items[][name]=b&total=2").unwrap();
    assert_eq!(people.items.len(), 2);
    assert_eq!(people.items[1].name, "b");

    let info_a = <Page<u16> as vc_form::info::Typed>::form_info();
    let info_b = <Page<Person> as vc_form::info::Typed>::form_info();
    assert_ne!(info_a.type_id(), info_b.type_id());
}

#[test]
fn structural_errors() {
    let cases: [(&str, fn(&DecodeError) -> bool); 6] = [
        ("[name]=x", |e| matches!(e, DecodeError::LeadingBracket { .. })),
        ("name[]=x", |e| matches!(e, DecodeError::NotAddressable { .. })),
        ("address[]=x", |e| matches!(e, DecodeError::UnexpectedIndex { .. })),
        ("tags[first]=x", |e| matches!(e, DecodeError::IndexExpected { .. })),
        ("scores[]=1", |e| matches!(e, DecodeError::UnexpectedIndex { .. })),
        ("address[city=x", |e| matches!(e, DecodeError::Syntax(_))),
    ];

    for (input, check) in cases {
        let err = vc_form::from_str::<ComplexPerson>(input).unwrap_err();
        assert!(check(&err), "{input}: {err:?}");
        assert_ne!(err.category(), ErrorCategory::InvalidCall);
    }

    let err = vc_form::from_str::<ComplexPerson>("address=x").unwrap_err();
    assert!(matches!(err, DecodeError::NotScalar { .. }));
    assert_eq!(err.category(), ErrorCategory::Type);
}

#[test]
fn invalid_roots() {
    let mut absent: Option<Person> = None;
    let err = vc_form::decode_str("name=x", &mut absent).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidCall);

    let mut present = Some(Person::default());
    vc_form::decode_str("name=x", &mut present).unwrap();
    assert_eq!(present.unwrap().name, "x");

    let mut text = Value::from("x");
    let err = vc_form::decode_str("a=b", &mut text).unwrap_err();
    assert!(matches!(err, DecodeError::TopLevel { .. }));

    let mut number = 0u32;
    let err = vc_form::decode_str("a=1", &mut number).unwrap_err();
    assert!(matches!(err, DecodeError::TopLevel { type_path: "u32" }));

    let mut list: Vec<String> = Vec::new();
    let err = vc_form::decode_str("a=1", &mut list).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Structural);
}

#[test]
fn traversal_order_without_sorting() {
    let codec = FormCodec::with_options(vc_form::CodecOptions::new().sort_output(false));
    let person = Person {
        name: "n".into(),
        age: 1,
        email_address: "e".into(),
        active: true,
    };
    assert_eq!(codec.encode_string(&person).unwrap(), "name=n&age=1&email=e&active=true");
}
