//! src/app/etat.rs
//!
//! État de session (sans affichage).
//!
//! Rôle : contenir l'état de la calculatrice (dernière entrée, résultats, erreur, digits, démarche)
//! et les réglages de démarrage (env + ligne de commande).
//!
//! Contrats :
//! - Une seule porte vers le noyau : `evaluer` (via eval_expression).
//! - Actions déterministes, sans effet de bord caché (pas d'E/S ici).
//! - Bornes sur la lecture décimale (digits).

use anyhow::{bail, Context};
use tracing::debug;

use fraction_qpur::noyau::{eval_expression, DemarcheNoyau, Resultat};

/// Précision de lecture décimale par défaut.
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-gel).
pub const DIGITS_MAX: usize = 200;

/// Variable d'environnement lue au démarrage pour la précision.
pub const ENV_DIGITS: &str = "QPUR_DIGITS";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub exact: String,   // affichage EXACT (n/d)
    pub lecture: String, // lecture décimale arrondie
    pub erreur: String,  // message d'erreur (si tokenisation/éval échoue)

    pub demarche: DemarcheNoyau,

    // --- paramètres ---
    pub digits: usize,
    pub afficher_jetons: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            exact: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            demarche: DemarcheNoyau::default(),
            digits: DIGITS_DEFAUT,
            afficher_jetons: false,
        }
    }
}

impl AppCalc {
    pub fn depuis_reglages(reglages: &Reglages) -> Self {
        let mut app = Self {
            afficher_jetons: reglages.jetons,
            ..Self::default()
        };
        app.set_digits(reglages.digits);
        app
    }

    /// Évalue `expr` et dépose le résultat (ou l'erreur). Renvoie vrai si succès.
    pub fn evaluer(&mut self, expr: &str) -> bool {
        self.entree = expr.to_string();

        match eval_expression(expr, self.digits) {
            Ok(resultat) => {
                self.set_resultats(resultat);
                true
            }
            Err(e) => {
                debug!(expr, erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
                false
            }
        }
    }

    /// Efface résultats + erreur + démarche (sans toucher à l'entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.demarche = DemarcheNoyau::default();
    }

    /// Place une erreur : les sorties précédentes ne sont plus fiables.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.clear_resultats();
        self.erreur = msg.into();
    }

    pub fn set_resultats(&mut self, resultat: Resultat) {
        self.erreur.clear();
        self.exact = resultat.exact;
        self.lecture = resultat.lecture;
        self.demarche = resultat.demarche;
    }

    /// Garde-fou : limite digits (évite un gel sur la division longue).
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        debug!(digits = self.digits, "précision de lecture");
    }
}

/* ------------------------ Réglages de démarrage ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub digits: usize,
    pub jetons: bool,
    pub aide: bool,
    pub expressions: Vec<String>,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            digits: DIGITS_DEFAUT,
            jetons: false,
            aide: false,
            expressions: Vec::new(),
        }
    }
}

/// Lit un nombre de décimales ; au-delà de DIGITS_MAX on borne.
pub fn lire_digits(texte: &str) -> anyhow::Result<usize> {
    let n: usize = texte
        .trim()
        .parse()
        .with_context(|| format!("digits invalide : \"{texte}\""))?;
    Ok(n.min(DIGITS_MAX))
}

impl Reglages {
    /// Priorité : défaut < variable d'environnement < ligne de commande.
    ///
    /// `-3` et autres arguments commençant par un seul "-" restent des expressions,
    /// sauf `-d` et `-h`. Après `--`, tout est expression.
    pub fn depuis<I>(env_digits: Option<&str>, args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut reglages = Self::default();

        if let Some(v) = env_digits {
            reglages.digits = lire_digits(v).with_context(|| format!("variable {ENV_DIGITS}"))?;
        }

        let mut args = args.into_iter();
        let mut options_finies = false;

        while let Some(arg) = args.next() {
            if options_finies {
                reglages.expressions.push(arg);
                continue;
            }

            match arg.as_str() {
                "--" => options_finies = true,
                "--digits" | "-d" => {
                    let Some(v) = args.next() else {
                        bail!("{arg} attend une valeur");
                    };
                    reglages.digits = lire_digits(&v)?;
                }
                "--jetons" => reglages.jetons = true,
                "--help" | "-h" => reglages.aide = true,
                _ => {
                    if let Some(v) = arg.strip_prefix("--digits=") {
                        reglages.digits = lire_digits(v)?;
                    } else if arg.starts_with("--") {
                        bail!("option inconnue : {arg}");
                    } else {
                        reglages.expressions.push(arg);
                    }
                }
            }
        }

        Ok(reglages)
    }
}
