use gpui::{AbsoluteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, Serializer, de::Error};
use smallvec::SmallVec;

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 4]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 4]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => {
            let mut list = SmallVec::new();
            list.push(string);
            Ok(list)
        }
        StringOrVec::Many(list) => {
            if list.is_empty() {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(list)
        }
    }
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.parse::<f32>() {
                Ok(pixels) => Ok(px(pixels)),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) => Ok(px(pixels)),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => return Ok(AbsoluteLength::Pixels(px(num))),

        StringOrFloat::String(string) => {
            if let Some(string) = string.strip_suffix("rem")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(AbsoluteLength::Rems(rems(value)));
            } else if let Some(string) = string.strip_suffix("px")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(AbsoluteLength::Pixels(px(value)));
            }
        }
    }

    Err(D::Error::custom(
        "expected f32 or string containing a f32 ending with 'rem' or 'px'",
    ))
}

/// Writes pixels back out in the `"<n>px"` form `de_pixels` reads.
pub fn ser_pixels<S>(pixels: &Pixels, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{}px", pixels.to_f64() as f32))
}

pub fn ser_abs_length<S>(length: &AbsoluteLength, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match length {
        AbsoluteLength::Pixels(pixels) => ser_pixels(pixels, serializer),
        // A rem size of one pixel yields the raw rem count.
        AbsoluteLength::Rems(value) => serializer.serialize_str(&format!(
            "{}rem",
            value.to_pixels(px(1.)).to_f64() as f32
        )),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Deserialize, Serialize)]
    struct Lengths {
        #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
        pixels: Pixels,
        #[serde(deserialize_with = "de_abs_length", serialize_with = "ser_abs_length")]
        length: AbsoluteLength,
    }

    #[derive(Deserialize)]
    struct Family {
        #[serde(deserialize_with = "de_string_or_non_empty_list")]
        family: SmallVec<[SharedString; 4]>,
    }

    #[test]
    fn test_pixels_accept_strings_and_numbers() {
        let lengths: Lengths =
            serde_json::from_str(r#"{ "pixels": "12px", "length": 3 }"#).unwrap();
        assert_eq!(lengths.pixels, px(12.));
        assert_eq!(lengths.length, AbsoluteLength::Pixels(px(3.)));

        let lengths: Lengths =
            serde_json::from_str(r#"{ "pixels": 7.5, "length": "1.25rem" }"#).unwrap();
        assert_eq!(lengths.pixels, px(7.5));
        assert_eq!(lengths.length, AbsoluteLength::Rems(rems(1.25)));
    }

    #[test]
    fn test_unknown_units_are_rejected() {
        assert!(serde_json::from_str::<Lengths>(r#"{ "pixels": "12pt", "length": 1 }"#).is_err());
        assert!(serde_json::from_str::<Lengths>(r#"{ "pixels": 1, "length": "2em" }"#).is_err());
    }

    #[test]
    fn test_lengths_serialize_with_units() {
        let lengths = Lengths {
            pixels: px(768.),
            length: AbsoluteLength::Rems(rems(0.875)),
        };
        let value = serde_json::to_value(&lengths).unwrap();

        assert_eq!(value["pixels"], "768px");
        assert_eq!(value["length"], "0.875rem");
    }

    #[test]
    fn test_family_accepts_single_string() {
        let family: Family = serde_json::from_str(r#"{ "family": "Roboto" }"#).unwrap();
        assert_eq!(family.family.as_slice(), &[SharedString::from("Roboto")]);
    }

    #[test]
    fn test_family_rejects_empty_list() {
        assert!(serde_json::from_str::<Family>(r#"{ "family": [] }"#).is_err());
    }
}
