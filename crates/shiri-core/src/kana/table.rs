//! Built-in romaji ↔ kana mapping data.

/// Longest romaji segment in any table. Greedy matching tries this many
/// characters first.
pub const MAX_ROMAJI_LEN: usize = 3;

/// Romaji → hiragana. Values are unique, so the reverse direction is a
/// bijection over this table.
pub const HIRAGANA: &[(&str, &str)] = &[
    ("a", "あ"),
    ("i", "い"),
    ("u", "う"),
    ("e", "え"),
    ("o", "お"),
    ("ka", "か"),
    ("ki", "き"),
    ("ku", "く"),
    ("ke", "け"),
    ("ko", "こ"),
    ("sa", "さ"),
    ("shi", "し"),
    ("su", "す"),
    ("se", "せ"),
    ("so", "そ"),
    ("ta", "た"),
    ("chi", "ち"),
    ("tsu", "つ"),
    ("te", "て"),
    ("to", "と"),
    ("na", "な"),
    ("ni", "に"),
    ("nu", "ぬ"),
    ("ne", "ね"),
    ("no", "の"),
    ("ha", "は"),
    ("hi", "ひ"),
    ("fu", "ふ"),
    ("he", "へ"),
    ("ho", "ほ"),
    ("ma", "ま"),
    ("mi", "み"),
    ("mu", "む"),
    ("me", "め"),
    ("mo", "も"),
    ("ya", "や"),
    ("yu", "ゆ"),
    ("yo", "よ"),
    ("ra", "ら"),
    ("ri", "り"),
    ("ru", "る"),
    ("re", "れ"),
    ("ro", "ろ"),
    ("wa", "わ"),
    ("wo", "を"),
    ("n", "ん"),
    ("ga", "が"),
    ("gi", "ぎ"),
    ("gu", "ぐ"),
    ("ge", "げ"),
    ("go", "ご"),
    ("za", "ざ"),
    ("ji", "じ"),
    ("zu", "ず"),
    ("ze", "ぜ"),
    ("zo", "ぞ"),
    ("da", "だ"),
    ("di", "ぢ"),
    ("dzu", "づ"),
    ("de", "で"),
    ("do", "ど"),
    ("ba", "ば"),
    ("bi", "び"),
    ("bu", "ぶ"),
    ("be", "べ"),
    ("bo", "ぼ"),
    ("pa", "ぱ"),
    ("pi", "ぴ"),
    ("pu", "ぷ"),
    ("pe", "ぺ"),
    ("po", "ぽ"),
    ("kya", "きゃ"),
    ("kyu", "きゅ"),
    ("kyo", "きょ"),
    ("sha", "しゃ"),
    ("shu", "しゅ"),
    ("sho", "しょ"),
    ("cha", "ちゃ"),
    ("chu", "ちゅ"),
    ("cho", "ちょ"),
    ("nya", "にゃ"),
    ("nyu", "にゅ"),
    ("nyo", "にょ"),
    ("hya", "ひゃ"),
    ("hyu", "ひゅ"),
    ("hyo", "ひょ"),
    ("mya", "みゃ"),
    ("myu", "みゅ"),
    ("myo", "みょ"),
    ("rya", "りゃ"),
    ("ryu", "りゅ"),
    ("ryo", "りょ"),
    ("gya", "ぎゃ"),
    ("gyu", "ぎゅ"),
    ("gyo", "ぎょ"),
    ("ja", "じゃ"),
    ("ju", "じゅ"),
    ("jo", "じょ"),
    ("dya", "ぢゃ"),
    ("dyu", "ぢゅ"),
    ("dyo", "ぢょ"),
    ("bya", "びゃ"),
    ("byu", "びゅ"),
    ("byo", "びょ"),
    ("pya", "ぴゃ"),
    ("pyu", "ぴゅ"),
    ("pyo", "ぴょ"),
];

/// Loanword morae that only exist in katakana. Keys never collide with
/// `HIRAGANA` keys.
pub const KATAKANA_EXTENDED: &[(&str, &str)] = &[
    ("she", "シェ"),
    ("che", "チェ"),
    ("je", "ジェ"),
    ("ti", "ティ"),
    ("tu", "トゥ"),
    ("tyu", "テュ"),
    ("dhi", "ディ"),
    ("dhu", "デュ"),
    ("du", "ドゥ"),
    ("tsa", "ツァ"),
    ("tse", "ツェ"),
    ("tso", "ツォ"),
    ("fa", "ファ"),
    ("fi", "フィ"),
    ("fe", "フェ"),
    ("fo", "フォ"),
    ("fyu", "フュ"),
    ("va", "ヴァ"),
    ("vi", "ヴィ"),
    ("vu", "ヴ"),
    ("ve", "ヴェ"),
    ("vo", "ヴォ"),
    ("wi", "ウィ"),
    ("we", "ウェ"),
    ("ye", "イェ"),
    ("kwa", "クァ"),
    ("gwa", "グァ"),
];

/// Hiragana ↔ katakana character pairs used for script substitution.
pub const SCRIPT_PAIRS: &[(char, char)] = &[
    ('あ', 'ア'),
    ('い', 'イ'),
    ('う', 'ウ'),
    ('え', 'エ'),
    ('お', 'オ'),
    ('か', 'カ'),
    ('き', 'キ'),
    ('く', 'ク'),
    ('け', 'ケ'),
    ('こ', 'コ'),
    ('さ', 'サ'),
    ('し', 'シ'),
    ('す', 'ス'),
    ('せ', 'セ'),
    ('そ', 'ソ'),
    ('た', 'タ'),
    ('ち', 'チ'),
    ('つ', 'ツ'),
    ('て', 'テ'),
    ('と', 'ト'),
    ('な', 'ナ'),
    ('に', 'ニ'),
    ('ぬ', 'ヌ'),
    ('ね', 'ネ'),
    ('の', 'ノ'),
    ('は', 'ハ'),
    ('ひ', 'ヒ'),
    ('ふ', 'フ'),
    ('へ', 'ヘ'),
    ('ほ', 'ホ'),
    ('ま', 'マ'),
    ('み', 'ミ'),
    ('む', 'ム'),
    ('め', 'メ'),
    ('も', 'モ'),
    ('や', 'ヤ'),
    ('ゆ', 'ユ'),
    ('よ', 'ヨ'),
    ('ら', 'ラ'),
    ('り', 'リ'),
    ('る', 'ル'),
    ('れ', 'レ'),
    ('ろ', 'ロ'),
    ('わ', 'ワ'),
    ('を', 'ヲ'),
    ('ん', 'ン'),
    ('が', 'ガ'),
    ('ぎ', 'ギ'),
    ('ぐ', 'グ'),
    ('げ', 'ゲ'),
    ('ご', 'ゴ'),
    ('ざ', 'ザ'),
    ('じ', 'ジ'),
    ('ず', 'ズ'),
    ('ぜ', 'ゼ'),
    ('ぞ', 'ゾ'),
    ('だ', 'ダ'),
    ('ぢ', 'ヂ'),
    ('づ', 'ヅ'),
    ('で', 'デ'),
    ('ど', 'ド'),
    ('ば', 'バ'),
    ('び', 'ビ'),
    ('ぶ', 'ブ'),
    ('べ', 'ベ'),
    ('ぼ', 'ボ'),
    ('ぱ', 'パ'),
    ('ぴ', 'ピ'),
    ('ぷ', 'プ'),
    ('ぺ', 'ペ'),
    ('ぽ', 'ポ'),
    ('ゃ', 'ャ'),
    ('ゅ', 'ュ'),
    ('ょ', 'ョ'),
    ('っ', 'ッ'),
    ('ゎ', 'ヮ'),
];

/// Hiragana → katakana only. The katakana side spells loanword morae
/// (ファ, ヴ) that have no hiragana form, so it is left out of the reverse map.
pub const LOANWORD_PAIRS: &[(char, char)] = &[
    ('ぁ', 'ァ'),
    ('ぃ', 'ィ'),
    ('ぅ', 'ゥ'),
    ('ぇ', 'ェ'),
    ('ぉ', 'ォ'),
    ('ゔ', 'ヴ'),
];

// Vowel rows, keyed on hiragana. Katakana is folded to hiragana before
// lookup so both scripts share one table.
pub(crate) const ROW_A: &str = "あかさたなはまやらわがざだばぱぁゃゎゕ";
pub(crate) const ROW_I: &str = "いきしちにひみりぎじぢびぴぃゐ";
pub(crate) const ROW_U: &str = "うくすつぬふむゆるぐずづぶぷぅゅゔ";
pub(crate) const ROW_E: &str = "えけせてねへめれげぜでべぺぇゑゖ";
pub(crate) const ROW_O: &str = "おこそとのほもよろをごぞどぼぽぉょ";

/// Small kana that bind to the preceding character to form one mora.
pub(crate) const COMBINING_SMALL: &str = "ゃゅょャュョぁぃぅぇぉァィゥェォゎヮ";

pub(crate) const SOKUON_HIRAGANA: &str = "っ";
pub(crate) const SOKUON_KATAKANA: &str = "ッ";
pub const CHOONPU: char = 'ー';
