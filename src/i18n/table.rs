//! Static translation tables.

use crate::domain::locale::Locale;

/// A node of the nested translation table.
#[derive(Debug)]
pub enum Node {
    Leaf(&'static str),
    Branch(&'static [(&'static str, Node)]),
}

impl Node {
    fn child(&self, segment: &str) -> Option<&Node> {
        match self {
            Node::Branch(children) => children
                .iter()
                .find(|(name, _)| *name == segment)
                .map(|(_, node)| node),
            Node::Leaf(_) => None,
        }
    }

    /// Walks the dotted `key` from this node down to a leaf.
    pub fn resolve(&self, key: &str) -> Option<&'static str> {
        let mut node = self;
        for segment in key.split('.') {
            node = node.child(segment)?;
        }
        match node {
            Node::Leaf(value) => Some(*value),
            Node::Branch(_) => None,
        }
    }
}

/// Returns the root of the table for `locale`.
pub fn root(locale: Locale) -> &'static Node {
    match locale {
        Locale::En => &EN,
        Locale::Fr => &FR,
    }
}

static EN: Node = Node::Branch(&[
    (
        "users",
        Node::Branch(&[
            ("title", Node::Leaf("Users")),
            ("searchPlaceholder", Node::Leaf("Search by name or email...")),
            ("loading", Node::Leaf("Loading users...")),
            ("error", Node::Leaf("Error loading users")),
            ("retry", Node::Leaf("Retry")),
            ("noUsersFound", Node::Leaf("No users found")),
            ("noUsersMatch", Node::Leaf("No users match your search criteria.")),
            ("showing", Node::Leaf("Showing {start}-{end} of {total} {count}")),
            ("user", Node::Leaf("user")),
            ("users", Node::Leaf("users")),
            ("previous", Node::Leaf("Previous")),
            ("next", Node::Leaf("Next")),
            ("username", Node::Leaf("Username")),
            ("email", Node::Leaf("Email")),
            ("phone", Node::Leaf("Phone")),
            ("website", Node::Leaf("Website")),
            ("name", Node::Leaf("Name")),
            ("search", Node::Leaf("Search")),
        ]),
    ),
    (
        "locale",
        Node::Branch(&[
            ("switch", Node::Leaf("Language")),
            ("en", Node::Leaf("English")),
            ("fr", Node::Leaf("Français")),
        ]),
    ),
    (
        "page",
        Node::Branch(&[
            ("notFound", Node::Leaf("Page not found")),
            ("backHome", Node::Leaf("Back to users")),
        ]),
    ),
]);

// Entries missing here fall back to `EN`.
static FR: Node = Node::Branch(&[
    (
        "users",
        Node::Branch(&[
            ("title", Node::Leaf("Utilisateurs")),
            ("searchPlaceholder", Node::Leaf("Rechercher par nom ou email...")),
            ("loading", Node::Leaf("Chargement des utilisateurs...")),
            ("error", Node::Leaf("Erreur lors du chargement des utilisateurs")),
            ("retry", Node::Leaf("Réessayer")),
            ("noUsersFound", Node::Leaf("Aucun utilisateur trouvé")),
            (
                "noUsersMatch",
                Node::Leaf("Aucun utilisateur ne correspond à vos critères de recherche."),
            ),
            ("showing", Node::Leaf("Affichage de {start} à {end} sur {total} {count}")),
            ("user", Node::Leaf("utilisateur")),
            ("users", Node::Leaf("utilisateurs")),
            ("previous", Node::Leaf("Précédent")),
            ("next", Node::Leaf("Suivant")),
            ("username", Node::Leaf("Nom d'utilisateur")),
            ("email", Node::Leaf("Email")),
            ("phone", Node::Leaf("Téléphone")),
            ("website", Node::Leaf("Site web")),
            ("name", Node::Leaf("Nom")),
        ]),
    ),
    (
        "locale",
        Node::Branch(&[
            ("switch", Node::Leaf("Langue")),
            ("en", Node::Leaf("English")),
            ("fr", Node::Leaf("Français")),
        ]),
    ),
    (
        "page",
        Node::Branch(&[("notFound", Node::Leaf("Page introuvable"))]),
    ),
]);

/// Collects every dotted leaf key of `node`, depth first.
pub fn leaf_keys(node: &'static Node) -> Vec<String> {
    fn walk(node: &'static Node, prefix: &str, keys: &mut Vec<String>) {
        match node {
            Node::Leaf(_) => keys.push(prefix.to_string()),
            Node::Branch(children) => {
                for (name, child) in children.iter() {
                    let path = if prefix.is_empty() {
                        (*name).to_string()
                    } else {
                        format!("{prefix}.{name}")
                    };
                    walk(child, &path, keys);
                }
            }
        }
    }

    let mut keys = Vec::new();
    walk(node, "", &mut keys);
    keys
}
