use std::io::Cursor;

use vc_form::stream::{FormDecoder, FormEncoder};
use vc_form::{CodecOptions, Form, FormCodec, StreamError};

#[derive(Form, Default, Debug, PartialEq)]
struct Login {
    user: String,
    #[form("remember,omitempty")]
    remember: bool,
}

#[test]
fn read_then_decode() {
    let mut decoder = FormDecoder::new(Cursor::new(b"user=ann&remember=1".to_vec()));
    let mut login = Login::default();
    decoder.decode(&mut login).unwrap();
    assert_eq!(login, Login { user: "ann".into(), remember: true });
}

#[test]
fn encode_then_write() {
    let mut encoder = FormEncoder::new(Vec::new());
    encoder.encode(&Login { user: "a b".into(), remember: false }).unwrap();
    assert_eq!(encoder.into_inner(), b"user=a+b");
}

#[test]
fn custom_codec() {
    let codec = FormCodec::with_options(CodecOptions::new().max_pairs(Some(1)));
    let mut decoder = FormDecoder::with_codec(Cursor::new("user=a&user=b"), &codec);

    let err = decoder.decode(&mut Login::default()).unwrap_err();
    assert!(matches!(err, StreamError::Decode(_)));
}
