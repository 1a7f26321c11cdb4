/// Extends string types with useful functions
pub trait StringExt {
    /// Expands environment-style placeholders in a string
    ///
    /// Both `$NAME` and `${NAME}` forms are substituted with the value of the
    /// corresponding environment variable. Placeholders for unset variables
    /// are left verbatim, as are malformed references such as a `${` with no
    /// closing brace or a `$` followed by nothing expandable.
    ///
    /// Dataset paths in analysis settings commonly lean on this, e.g.
    /// `$NU_DATA/aeff/aeff_mc.json`.
    ///
    /// ```rust
    /// # use nutools_utils::StringExt;
    /// std::env::set_var("NU_DATA", "/data/nu");
    ///
    /// assert_eq!("$NU_DATA/aeff.json".expand_vars(), "/data/nu/aeff.json");
    /// assert_eq!("${NU_DATA}/aeff.json".expand_vars(), "/data/nu/aeff.json");
    ///
    /// // unset variables are left alone
    /// assert_eq!("$NU_UNSET/aeff.json".expand_vars(), "$NU_UNSET/aeff.json");
    /// ```
    fn expand_vars(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn expand_vars(&self) -> String {
        let source = self.as_ref();
        let mut expanded = String::with_capacity(source.len());
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                expanded.push(c);
                continue;
            }

            if chars.peek() == Some(&'{') {
                chars.next();

                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }

                match std::env::var(&name) {
                    Ok(value) if closed => expanded.push_str(&value),
                    _ => {
                        expanded.push_str("${");
                        expanded.push_str(&name);
                        if closed {
                            expanded.push('}');
                        }
                    }
                }
            } else {
                let mut name = String::new();
                while let Some(c) = chars.peek() {
                    if c.is_ascii_alphanumeric() || *c == '_' {
                        name.push(*c);
                        chars.next();
                    } else {
                        break;
                    }
                }

                match std::env::var(&name) {
                    Ok(value) if !name.is_empty() => expanded.push_str(&value),
                    _ => {
                        expanded.push('$');
                        expanded.push_str(&name);
                    }
                }
            }
        }

        expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strings_are_untouched() {
        assert_eq!("/data/nu/aeff.json".expand_vars(), "/data/nu/aeff.json");
        assert_eq!("".expand_vars(), "");
    }

    #[test]
    fn both_placeholder_forms_expand() {
        std::env::set_var("NUTOOLS_TEST_DIR", "/tmp/nutools");
        assert_eq!(
            "$NUTOOLS_TEST_DIR/aeff.json".expand_vars(),
            "/tmp/nutools/aeff.json"
        );
        assert_eq!(
            "${NUTOOLS_TEST_DIR}/aeff.json".expand_vars(),
            "/tmp/nutools/aeff.json"
        );
    }

    #[test]
    fn unset_variables_are_verbatim() {
        std::env::remove_var("NUTOOLS_TEST_UNSET");
        assert_eq!("$NUTOOLS_TEST_UNSET".expand_vars(), "$NUTOOLS_TEST_UNSET");
        assert_eq!(
            "${NUTOOLS_TEST_UNSET}".expand_vars(),
            "${NUTOOLS_TEST_UNSET}"
        );
    }

    #[test]
    fn malformed_references_are_verbatim() {
        assert_eq!("100$".expand_vars(), "100$");
        assert_eq!("a$-b".expand_vars(), "a$-b");
        assert_eq!("${NO_CLOSING".expand_vars(), "${NO_CLOSING");
    }
}
