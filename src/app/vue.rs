// src/app/vue.rs
//
// Vue texte (terminal)
// --------------------
// - une évaluation réussie : "= EXACT" puis "≈ lecture"
// - une erreur            : "erreur : message"
// - --jetons              : la démarche (suite de jetons) en tête

use super::etat::AppCalc;

/// Invite affichée quand l'entrée standard est un terminal.
pub const INVITE: &str = "qpur> ";

pub const USAGE: &str = "\
usage : fraction_qpur [--digits N | -d N] [--jetons] [--] [EXPR...]

Sans EXPR, lit une expression par ligne sur l'entrée standard.
Commandes : :digits N (précision de lecture), :q (quitter).
Variable d'environnement : QPUR_DIGITS (précision par défaut).";

impl AppCalc {
    /// Rendu du dernier résultat (sans saut de ligne final).
    pub fn rendu(&self) -> String {
        if !self.erreur.is_empty() {
            return format!("erreur : {}", self.erreur);
        }

        let mut lignes = Vec::with_capacity(3);
        if self.afficher_jetons {
            lignes.push(format!("jetons : {}", self.demarche.jetons));
        }
        lignes.push(format!("= {}", self.exact));
        lignes.push(format!("≈ {}", self.lecture));
        lignes.join("\n")
    }

    pub fn rendu_digits(&self) -> String {
        format!("digits = {}", self.digits)
    }
}
