use serde::{de, Deserialize, Deserializer};

// `?page=abc` serves the default page instead of rejecting the request
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| raw.trim().parse::<u32>().ok()))
}

// the frontend sends ids from <select> values and object keys, so they arrive
// as strings as often as numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    fn into_i32(self) -> Result<i32, String> {
        match self {
            NumberOrString::Number(n) => {
                i32::try_from(n).map_err(|_| format!("{} is out of range", n))
            }
            NumberOrString::Text(s) => s
                .trim()
                .parse::<i32>()
                .map_err(|_| format!("Wrong value {s}, can not parse to integer")),
        }
    }
}

pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(|value| value.into_i32().map_err(de::Error::custom))
        .transpose()
}
