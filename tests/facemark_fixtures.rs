// Facemark detector fixture corpus. Each case drives the detector against
// a store seeded with a single end-of-text candidate and checks the one
// boundary the detector asserts: the code-point offset where the face
// (with its limbs) ends.

mod common;

use common::{annotate_seeded, confirmed_ends};
use kugiri::detector::FacemarkDetector;

fn detector() -> FacemarkDetector {
    FacemarkDetector::new(common::FIRST_PASS).unwrap()
}

fn assert_single_boundary(cases: &[(&str, usize)]) {
    let detector = detector();
    for &(text, expected) in cases {
        let store = annotate_seeded(&detector, text);
        let ends = confirmed_ends(&store, "facemark");
        assert_eq!(
            ends,
            vec![expected],
            "text {text:?}: expected one boundary at {expected}, got {ends:?}"
        );
    }
}

#[test]
fn test_face_at_end_of_text() {
    assert_single_boundary(&[
        ("いい湯でした(^_^)", 11),
        ("品揃えは良い(^o^)", 11),
        ("品揃えは良い(^^)", 10),
        ("品揃えは良い(^-^)", 11),
        ("サービスは良好（●＾o＾●）", 14),
        ("食事はよかった（＾◇＾）", 12),
        ("食事はよかった(*^_^*)", 14),
        ("品揃えは良い(*´ｰ`)", 12),
        ("サービスは良好(*´∀｀*)", 14),
        ("食事はよかった(*´ω｀*)", 14),
        ("品揃えは良い(*´艸｀*)", 13),
        ("食事はよかった(/ω＼)", 12),
        ("サービスは良好(^_^)V", 13),
        ("食事はよかった(^o^)V", 13),
        ("いい湯でしたo(^o^)o", 13),
        ("サービスは良好σ(^_^)", 13),
        ("食事はよかったσ(´∀｀)", 13),
        ("品揃えは良い!(^^)!", 12),
        ("子供連れによい(^^ゞ", 11),
        ("食事はよかった(^^ゝ", 11),
        ("食事はよかった(^人^)", 12),
        ("サービスは良好(^_-)-☆", 14),
        ("食事はよかった(^з^)-☆", 14),
        ("食事はよかった＼(◎o◎)／", 14),
        ("食事はよかった(@_@)", 12),
        ("品揃えは良い(＠_＠;)", 12),
        ("サービスは良好(# ﾟДﾟ)", 14),
        ("サービスは良好( ・_・)", 13),
        ("いい湯でした(・_・)", 11),
        ("食事はよかった(・o・)", 12),
        ("サービスは良好(｡･･｡)", 13),
        ("品揃えは良い(゜_゜)", 11),
        ("いい湯でした(`_`)ノ゛", 13),
        ("サービスは良好(￣ー￣)ｂ", 13),
        ("サービスは良好(-_-;)", 13),
        ("いい湯でした(=_=;)", 12),
        ("いい湯でした(ﾉ´Д`)", 12),
        ("サービスは良好(-o-;)", 13),
        ("食事はよかった(^^;)", 12),
        ("子供連れによい(^_^;)", 13),
        ("子供連れによい(^o^;)", 13),
        ("食事はよかった...(((;^^)", 17),
        ("いい湯でした(ﾟεﾟ*)", 12),
        ("食事はよかった♪〜(￣ε￣；)", 15),
        ("品揃えは良い(~o~)m", 12),
        ("品揃えは良い(-.-)zzZZ", 15),
        ("子供連れによい(-_-)zzZZ", 16),
        ("食事はよかった(+_+)", 12),
        ("食事はよかった( ..)ヾ", 13),
        ("食事はよかった(o-_-o)", 14),
        ("サービスは良好ヽ(#ﾟДﾟ)ﾉ", 15),
        ("サービスは良好(ーー゛)", 12),
        ("サービスは良好(-’’-)", 13),
        ("食事はよかった(｀´）", 11),
        ("いい湯でしたヽ(#｀Д´#)ﾉ", 15),
        ("品揃えは良い(￣へ￣井)", 12),
        ("サービスは良好(￣д￣)", 12),
        ("食事はよかった( ´Д｀)", 13),
        ("サービスは良好(ﾉ´□｀)ﾉ", 14),
        ("いい湯でしたヽ(*´Д｀*)ﾉ", 15),
        ("サービスは良好┐(´〜`；)┌", 15),
        ("子供連れによい(#´Д｀#)", 14),
        ("いい湯でしたヽ(￣▽￣)ﾉ", 13),
        ("いい湯でした(*_*)", 11),
        ("いい湯でした( -_-)", 12),
        ("いい湯でした｜(-_-)｜", 13),
        ("子供連れによい(;_;)", 12),
        ("品揃えは良い(T_T)", 11),
        ("子供連れによい(/_;)", 12),
        ("食事はよかった(ﾉдヽ)", 12),
        ("いい湯でした(TдT)", 11),
        ("いい湯でした(ﾉ´□｀)", 12),
        ("食事はよかったヽ(;´Д`)ノ", 15),
        ("子供連れによい(ｏ´_｀ｏ)", 14),
        ("子供連れによい(^∧^)", 12),
        ("食事はよかったm(_ _)m", 14),
        ("いい湯でした＼(__ )", 12),
        ("いい湯でした(+д+)", 11),
        ("食事はよかった（￣□￣；）", 13),
        ("子供連れによい(lll￣□￣)", 15),
        ("子供連れによいp(^^)q", 13),
        ("品揃えは良い(-o-)y-~~~", 16),
        ("いい湯でした(^_^)y-~~~", 16),
        ("いい湯でした(’A`)y-~", 14),
        ("いい湯でしたφ(..)", 11),
        ("食事はよかったφ(｀д´)", 13),
        ("食事はよかったφ(^o^)", 13),
        ("子供連れによいVo￥oV", 12),
        ("食事はよかった(ΦωΦ)", 12),
        ("食事はよかったU^ｪ^U", 12),
        ("いい湯でした(^_^)/~~~", 15),
    ]);
}

#[test]
fn test_face_sequences_assert_only_the_final_end() {
    // Between faces there is no ordinary text, so only the face that
    // closes the document asserts a boundary.
    assert_single_boundary(&[
        ("サービスは良好( ^_^)／□☆□＼(^_^ )", 24),
        ("いい湯でした( ^_^)／ o(^o^)o ＼(^_^ )", 29),
        ("食事はよかった(／＼) ＼(^o^)／", 19),
        ("子供連れによい＼(^_^ )( ^_^)／", 21),
    ]);
}

#[test]
fn test_face_followed_by_japanese_text() {
    assert_single_boundary(&[
        ("いい湯でした(^_^)食事はよかった", 11),
        ("サービスは良好(^o^)子供連れによい", 12),
        ("品揃えは良い(*´ω｀*)サービスは良好", 13),
        ("子供連れによいσ(^_^)子供連れによい", 13),
        ("食事はよかったφ(^o^)食事はよかった", 13),
        ("品揃えは良い(￣へ￣井)食事はよかった", 12),
        ("子供連れによいm(_ _)m子供連れによい", 14),
        ("食事はよかったヽ(;´Д`)ノ品揃えは良い", 15),
    ]);
}

#[test]
fn test_face_followed_by_latin_text() {
    assert_single_boundary(&[
        ("いい湯でした(^_^)MFG", 11),
        ("サービスは良好(^o^)USJ", 12),
        ("品揃えは良い(*´∀｀*)DB", 13),
        ("いい湯でした(^^)USJ", 10),
        ("子供連れによいp(^^)qUBS", 13),
        ("食事はよかった(ΦωΦ)SGM", 12),
    ]);
}

#[test]
fn test_plain_japanese_text_yields_no_faces() {
    let detector = detector();
    for text in ["いい湯でした", "休業します（臨時）", "「引用」です"] {
        let store = annotate_seeded(&detector, text);
        assert!(
            confirmed_ends(&store, "facemark").is_empty(),
            "text {text:?} should not contain a face"
        );
    }
}
