use cookie::Cookie;

/// Name to value map for a single login session.
///
/// Only the `name=value` pair of each `Set-Cookie` is kept; attributes such
/// as `Path` or `Expires` are dropped since the jar dies with the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    entries: Vec<(String, String)>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts every parseable header. A later value for a name replaces the
    /// earlier one in place.
    pub fn merge<'a, I>(&mut self, set_cookie_headers: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for raw in set_cookie_headers {
            let Ok(cookie) = Cookie::parse(raw) else {
                continue;
            };
            let (name, value) = (cookie.name().trim(), cookie.value().trim());
            if name.is_empty() || value.is_empty() {
                continue;
            }
            self.insert(name, value);
        }
    }

    fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value for a `Cookie` request header.
    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_name_value_pairs() {
        let mut jar = CookieJar::new();
        jar.merge([
            "ASP.NET_SessionId=abc; path=/; HttpOnly",
            "__RequestVerificationToken_L0hvbWVBY2Nlc3M1=tok; path=/; secure",
        ]);
        assert_eq!(
            jar.serialize(),
            "ASP.NET_SessionId=abc; __RequestVerificationToken_L0hvbWVBY2Nlc3M1=tok"
        );
    }

    #[test]
    fn last_write_wins_and_keeps_position() {
        let mut jar = CookieJar::new();
        jar.merge(["a=1", "b=2"]);
        jar.merge(["a=3; Path=/", "c=4"]);
        jar.merge(["b=5"]);
        assert_eq!(jar.serialize(), "a=3; b=5; c=4");
        assert_eq!(jar.len(), 3);
    }

    #[test]
    fn one_value_per_name_equal_to_last_setter() {
        let headers = [
            "x=1", "y=1", "x=2", "z=1", "y=2", "x=3; Max-Age=0", "z=2",
        ];
        let mut jar = CookieJar::new();
        for header in headers {
            jar.merge([header]);
        }
        let serialized = jar.serialize();
        let pairs: Vec<&str> = serialized.split("; ").collect();
        assert_eq!(pairs, vec!["x=3", "y=2", "z=2"]);
    }

    #[test]
    fn ignores_malformed_and_empty_values() {
        let mut jar = CookieJar::new();
        jar.merge(["session=ok"]);
        jar.merge(["no-equals-sign", "session=; expires=Thu, 01 Jan 1970 00:00:00 GMT", "=orphan"]);
        assert_eq!(jar.get("session"), Some("ok"));
        assert_eq!(jar.serialize(), "session=ok");
    }

    #[test]
    fn values_may_contain_equals() {
        let mut jar = CookieJar::new();
        jar.merge([".AuthCookie=AbC==; path=/"]);
        assert_eq!(jar.get(".AuthCookie"), Some("AbC=="));
    }

    #[test]
    fn empty_jar_serializes_to_empty_string() {
        assert_eq!(CookieJar::new().serialize(), "");
        assert!(CookieJar::new().is_empty());
    }
}
