use serde::{Deserialize, Deserializer};

/// Upstream writes `null` where it has nothing to say (e.g. no running jobs), which should read the
/// same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(non_snake_case)]
#[cfg(test)]
mod test {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Holder {
        #[serde(deserialize_with = "null_as_default")]
        items: Vec<u32>,
    }

    #[test]
    fn null_as_default__null() {
        let holder: Holder = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(holder.items.is_empty());
    }

    #[test]
    fn null_as_default__present() {
        let holder: Holder = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(holder.items, vec![1, 2]);
    }

    #[test]
    fn null_as_default__wrong_type_still_fails() {
        assert!(serde_json::from_str::<Holder>(r#"{"items": "nope"}"#).is_err());
    }
}
