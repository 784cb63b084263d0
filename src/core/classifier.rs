/// Organizations that took part in recent Google Summer of Code rounds.
#[rustfmt::skip]
pub const DEFAULT_GSOC_ORGS: &[&str] = &[
    // Major organizations
    "opensuse", "mozilla", "kubernetes", "apache", "google", "tensorflow",
    "gnome", "kde", "fedora", "python", "numpy", "django", "zulip",
    "cncf", "hashicorp", "grafana", "prometheus", "jenkins", "gitlab",
    // Cloud native & DevOps
    "kubeflow", "kubevirt", "ceph", "libvirt", "asyncapi", "metacall",
    "prometheus-operator", "elastic", "influxdata", "envoyproxy",
    // Linux & OS
    "debian", "freebsd", "openbsd", "haiku", "nixos", "unikraft",
    // Languages & compilers
    "llvm", "gcc", "rust-lang", "golang", "scala", "kotlin", "haskell",
    "julia", "r-project", "ruby", "perl", "lua",
    // Web & frontend
    "webpack", "electron", "vuejs", "angular", "nodejs", "react",
    "neutralinojs", "postman", "graphql",
    // Multimedia & creative
    "blender", "gimp", "inkscape", "videolan", "vlc", "ffmpeg", "krita",
    "audacity", "mixxx", "musescore", "ardour", "godot",
    // Science & research
    "scipy", "pandas", "matplotlib", "jupyter", "opencv", "openvino",
    "openchemistry", "bioconductor", "biopython", "rdkit",
    // Communications
    "matrix", "rocket.chat", "mattermost", "xmpp", "jitsi", "signal",
    "element", "deltachat", "conversations",
    // Education
    "oppia", "sugarlabs", "mit-app-inventor", "learningequality", "anki",
    "ankidroid", "moodle", "ilias", "openstax",
    // Productivity & office
    "libreoffice", "onlyoffice", "collabora", "nextcloud", "owncloud",
    "cryptpad", "etherpad", "joplin",
    // GIS & maps
    "openstreetmap", "osgeo", "qgis", "organicmaps", "osmand",
    // Healthcare
    "openmrs", "openemr", "openhealthcare", "gnu-health",
    // Finance & business
    "mifos", "openmf", "erpnext", "odoo", "gnucash",
    // Security
    "owasp", "tor", "privacytools", "eff", "fsf", "aboutcode",
    // Robotics & hardware
    "ardupilot", "beagleboard", "freecad", "kicad", "opencad", "brlcad",
    "openrobotics", "ros", "fossi", "chips-alliance",
    // Gaming & simulation
    "scummvm", "godotengine", "openra", "wesnoth", "flightgear",
    // Documentation & wiki
    "wikimedia", "mediawiki", "bookbrainz", "musicbrainz", "metabrainz",
    // CMS & web platforms
    "wordpress", "drupal", "joomla", "plone", "wagtail",
    // Data & AI
    "sktime", "mlpack", "shogun", "rapids", "dmlc", "onnx",
    // Testing & quality
    "checkstyle", "submitty", "robolectric", "selenium",
    // Other
    "circuitverse", "fossasia", "aossie", "ccextractor", "kiwix",
    "jderobot", "redhenlab", "catrobat", "openwisp", "openfoodfacts",
    "internetarchive", "creativecommons", "publiclab", "chaoss",
    "phpmyadmin", "phpbb", "humanhub", "discourse", "flarum",
];

/// Flags repository owners that belong to an allow-listed organization.
///
/// Matching is case-insensitive substring containment, so an owner such as
/// `pythonic` is eligible through the `python` token.
#[derive(Debug, Clone)]
pub struct OrganizationClassifier {
    tokens: Vec<String>,
}

impl OrganizationClassifier {
    pub fn new<I, S>(organizations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = organizations
            .into_iter()
            .map(|org| org.as_ref().trim().to_lowercase())
            .filter(|org| !org.is_empty())
            .collect();
        Self { tokens }
    }

    pub fn is_eligible(&self, owner: &str) -> bool {
        let owner = owner.to_lowercase();
        self.tokens.iter().any(|token| owner.contains(token.as_str()))
    }

    /// Owner segment of an `owner/name` repository name.
    pub fn owner_of(repo_full_name: &str) -> &str {
        repo_full_name.split('/').next().unwrap_or(repo_full_name)
    }

    pub fn is_eligible_repo(&self, repo_full_name: &str) -> bool {
        self.is_eligible(Self::owner_of(repo_full_name))
    }
}

impl Default for OrganizationClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_GSOC_ORGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_owner_is_eligible() {
        let classifier = OrganizationClassifier::default();
        assert!(classifier.is_eligible("kubernetes"));
        assert!(classifier.is_eligible("rust-lang"));
    }

    #[test]
    fn test_matching_ignores_case() {
        let classifier = OrganizationClassifier::new(["openSUSE", "deltaChat"]);
        assert!(classifier.is_eligible("OpenSUSE"));
        assert!(classifier.is_eligible("deltachat"));
    }

    #[test]
    fn test_substring_containment_is_loose() {
        let classifier = OrganizationClassifier::new(["python", "golang"]);
        assert!(classifier.is_eligible("pythonic"));
        assert!(classifier.is_eligible("golang-something-else"));
        assert!(!classifier.is_eligible("pyth"));
    }

    #[test]
    fn test_unlisted_owner_is_not_eligible() {
        let classifier = OrganizationClassifier::new(["apache"]);
        assert!(!classifier.is_eligible("geetxnshgoyal"));
    }

    #[test]
    fn test_blank_tokens_are_ignored() {
        let classifier = OrganizationClassifier::new(["", "  "]);
        assert!(!classifier.is_eligible("anything"));
    }

    #[test]
    fn test_repo_owner_extraction() {
        let classifier = OrganizationClassifier::new(["mozilla"]);
        assert_eq!(OrganizationClassifier::owner_of("mozilla/gecko-dev"), "mozilla");
        assert!(classifier.is_eligible_repo("mozilla/gecko-dev"));
        assert!(!classifier.is_eligible_repo("octocat/mozilla"));
    }
}
