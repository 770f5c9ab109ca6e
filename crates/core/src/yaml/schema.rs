//! Plain scalar resolution for the YAML 1.1 and 1.2 core type repositories.

use std::sync::LazyLock;

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
use regex::{Captures, Regex};

use super::types::{ParsedValue, Scalar, YamlVersion};

const CORE_TAG_PREFIXES: &[&str] = &["tag:yaml.org,2002:", "!!"];

static NULL_1_1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:~|[Nn]ull|NULL)?$").expect("valid regex"));
static TRUE_1_1: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[Yy]|[Yy]es|YES|[Tt]rue|TRUE|[Oo]n|ON)$").expect("valid regex")
});
static FALSE_1_1: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[Nn]|[Nn]o|NO|[Ff]alse|FALSE|[Oo]ff|OFF)$").expect("valid regex")
});
static BIN_1_1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+]?)0b([01_]+)$").expect("valid regex"));
static OCT_1_1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+]?)0([0-7_]+)$").expect("valid regex"));
static DEC_1_1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+]?)([0-9][0-9_]*)$").expect("valid regex"));
static HEX_1_1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+]?)0x([0-9a-fA-F_]+)$").expect("valid regex"));
static SEXAGESIMAL_INT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-+]?)([0-9][0-9_]*(?::[0-5]?[0-9])+)$").expect("valid regex")
});
static SEXAGESIMAL_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-+]?)([0-9][0-9_]*(?::[0-5]?[0-9])+)\.([0-9_]*)$").expect("valid regex")
});
static FLOAT_1_1: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[-+]?(?:(?:[0-9][0-9_]*)?\.[0-9_]*[eE][-+]?[0-9]+|[0-9][0-9_]*[eE][-+]?[0-9]+|[0-9][0-9_]*\.[0-9_]*|\.[0-9][0-9_]*)$",
    )
    .expect("valid regex")
});

static NULL_1_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:~|null|Null|NULL)?$").expect("valid regex"));
static BOOL_1_2: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(true|True|TRUE)|false|False|FALSE)$").expect("valid regex")
});
static DEC_1_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+]?)([0-9]+)$").expect("valid regex"));
static OCT_1_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^()0o([0-7]+)$").expect("valid regex"));
static HEX_1_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^()0x([0-9a-fA-F]+)$").expect("valid regex"));
static FLOAT_1_2: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?)(?:[eE][-+]?[0-9]+)?$")
        .expect("valid regex")
});

static INF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+]?)\.(?:inf|Inf|INF)$").expect("valid regex"));
static NAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.(?:nan|NaN|NAN)$").expect("valid regex"));

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{1,2})-(?P<day>[0-9]{1,2})(?:(?:[Tt]|[ \t]+)(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})(?:\.(?P<fraction>[0-9]*))?(?:[ \t]*(?P<zone>Z|[-+][0-9]{1,2}(?::?[0-9]{2})?))?)?$",
    )
    .expect("valid regex")
});

/// Resolve an untagged plain scalar.
pub fn resolve_plain(value: &str, version: YamlVersion) -> ParsedValue {
    match version {
        YamlVersion::V1_1 => resolve_1_1(value),
        YamlVersion::V1_2 => resolve_1_2(value),
    }
}

/// Resolve a scalar carrying an explicit tag.
///
/// Core tags force the named type; a value that does not fit the tag, and
/// any other tag, yields the string itself.
pub fn resolve_tagged(
    value: &str,
    handle: &str,
    suffix: &str,
    version: YamlVersion,
) -> ParsedValue {
    if !CORE_TAG_PREFIXES.contains(&handle) {
        return ParsedValue::string(value);
    }

    let resolved = match suffix {
        "str" => None,
        "null" => Some(ParsedValue::Null),
        "bool" => resolve_bool(value, version),
        "int" => resolve_int(value, version),
        "float" => resolve_float(value, version).or_else(|| {
            resolve_int(value, version).map(|v| match v {
                ParsedValue::Scalar(Scalar::Int(i)) => float(i as f64),
                other => other,
            })
        }),
        "timestamp" => resolve_timestamp(value),
        _ => None,
    };

    resolved.unwrap_or_else(|| ParsedValue::string(value))
}

fn resolve_1_1(value: &str) -> ParsedValue {
    if NULL_1_1.is_match(value) {
        return ParsedValue::Null;
    }
    resolve_bool(value, YamlVersion::V1_1)
        .or_else(|| resolve_int(value, YamlVersion::V1_1))
        .or_else(|| resolve_float(value, YamlVersion::V1_1))
        .or_else(|| resolve_timestamp(value))
        .unwrap_or_else(|| ParsedValue::string(value))
}

fn resolve_1_2(value: &str) -> ParsedValue {
    if NULL_1_2.is_match(value) {
        return ParsedValue::Null;
    }
    resolve_bool(value, YamlVersion::V1_2)
        .or_else(|| resolve_int(value, YamlVersion::V1_2))
        .or_else(|| resolve_float(value, YamlVersion::V1_2))
        .unwrap_or_else(|| ParsedValue::string(value))
}

fn resolve_bool(value: &str, version: YamlVersion) -> Option<ParsedValue> {
    let b = match version {
        YamlVersion::V1_1 if TRUE_1_1.is_match(value) => true,
        YamlVersion::V1_1 if FALSE_1_1.is_match(value) => false,
        YamlVersion::V1_1 => return None,
        YamlVersion::V1_2 => BOOL_1_2.captures(value)?.get(1).is_some(),
    };
    Some(ParsedValue::Scalar(Scalar::Bool(b)))
}

fn resolve_int(value: &str, version: YamlVersion) -> Option<ParsedValue> {
    let radix_forms: [(&Regex, u32); 3] = match version {
        YamlVersion::V1_1 => [(&BIN_1_1, 2), (&HEX_1_1, 16), (&OCT_1_1, 8)],
        YamlVersion::V1_2 => [(&OCT_1_2, 8), (&HEX_1_2, 16), (&DEC_1_2, 10)],
    };

    for (re, radix) in radix_forms {
        if let Some(caps) = re.captures(value) {
            return Some(integer(&caps[1], &caps[2], radix));
        }
    }

    if version == YamlVersion::V1_1 {
        if let Some(caps) = DEC_1_1.captures(value) {
            return Some(integer(&caps[1], &caps[2], 10));
        }
        if let Some(caps) = SEXAGESIMAL_INT.captures(value) {
            let total = sexagesimal(&caps[2]);
            let signed = if &caps[1] == "-" { -total } else { total };
            return Some(whole_number(signed));
        }
    }

    None
}

fn resolve_float(value: &str, version: YamlVersion) -> Option<ParsedValue> {
    if NAN.is_match(value) {
        return Some(float(f64::NAN));
    }
    if let Some(caps) = INF.captures(value) {
        let inf = if &caps[1] == "-" { f64::NEG_INFINITY } else { f64::INFINITY };
        return Some(float(inf));
    }

    match version {
        YamlVersion::V1_1 => {
            if let Some(caps) = SEXAGESIMAL_FLOAT.captures(value) {
                let fraction: f64 =
                    format!("0.{}", caps[3].replace('_', "")).parse().unwrap_or(0.0);
                let total = sexagesimal(&caps[2]) + fraction;
                return Some(float(if &caps[1] == "-" { -total } else { total }));
            }
            if FLOAT_1_1.is_match(value) {
                return value.replace('_', "").parse().ok().map(float);
            }
            None
        }
        YamlVersion::V1_2 => {
            if FLOAT_1_2.is_match(value) {
                return value.parse().ok().map(float);
            }
            None
        }
    }
}

fn resolve_timestamp(value: &str) -> Option<ParsedValue> {
    let caps = TIMESTAMP.captures(value)?;
    let date = NaiveDate::from_ymd_opt(
        field(&caps, "year")?,
        field(&caps, "month")?,
        field(&caps, "day")?,
    )?;

    let time = if caps.name("hour").is_some() {
        let nanos = caps.name("fraction").map_or(0, |m| fraction_nanos(m.as_str()));
        NaiveTime::from_hms_nano_opt(
            field(&caps, "hour")?,
            field(&caps, "minute")?,
            field(&caps, "second")?,
            nanos,
        )?
    } else {
        NaiveTime::from_hms_opt(0, 0, 0)?
    };

    let offset = match caps.name("zone").map(|m| m.as_str()) {
        None | Some("Z") => FixedOffset::east_opt(0)?,
        Some(zone) => parse_zone(zone)?,
    };

    offset.from_local_datetime(&date.and_time(time)).single().map(ParsedValue::Date)
}

fn field<T: std::str::FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name)?.as_str().parse().ok()
}

fn fraction_nanos(digits: &str) -> u32 {
    let mut padded: String = digits.chars().take(9).collect();
    while padded.len() < 9 {
        padded.push('0');
    }
    padded.parse().unwrap_or(0)
}

fn parse_zone(zone: &str) -> Option<FixedOffset> {
    let (sign, rest) = zone.split_at(1);
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() > 2 => rest.split_at(rest.len() - 2),
        None => (rest, "0"),
    };
    let seconds = hours.parse::<i32>().ok()? * 3600 + minutes.parse::<i32>().ok()? * 60;
    FixedOffset::east_opt(if sign == "-" { -seconds } else { seconds })
}

fn integer(sign: &str, digits: &str, radix: u32) -> ParsedValue {
    let digits = digits.replace('_', "");
    let negative = sign == "-";

    match i64::from_str_radix(&digits, radix) {
        Ok(v) => ParsedValue::Scalar(Scalar::Int(if negative { -v } else { v })),
        Err(_) => {
            let magnitude = digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0_f64, |acc, d| acc * f64::from(radix) + f64::from(d));
            float(if negative { -magnitude } else { magnitude })
        }
    }
}

fn sexagesimal(parts: &str) -> f64 {
    parts
        .replace('_', "")
        .split(':')
        .filter_map(|p| p.parse::<f64>().ok())
        .fold(0.0, |acc, p| acc * 60.0 + p)
}

fn whole_number(value: f64) -> ParsedValue {
    // Exact for every value below 2^53; larger ones stay floats.
    if value.abs() < 9_007_199_254_740_992.0 {
        ParsedValue::Scalar(Scalar::Int(value as i64))
    } else {
        float(value)
    }
}

fn float(value: f64) -> ParsedValue {
    ParsedValue::Scalar(Scalar::Float(value))
}
