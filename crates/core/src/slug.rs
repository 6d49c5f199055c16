//! Project slug derivation.

/// Derive a project slug from its display name.
///
/// The slug is the lowercase form of the name; nothing else is stripped or
/// replaced, so two names collide exactly when they are equal ignoring case.
///
/// ```
/// use taskboard_core::slug::project_slug;
///
/// assert_eq!(project_slug("Awesome"), "awesome");
/// ```
pub fn project_slug(name: &str) -> String {
    name.to_lowercase()
}
