// src/app.rs
//
// Calculatrice Q-pur: front-end terminal (racine)
// ---------------------------------------------
// - etat.rs : AppCalc + Reglages (env / ligne de commande)
// - vue.rs  : rendu texte
//
// Deux modes :
// - expressions en arguments : chacune évaluée et affichée, échec si l'une échoue
// - sinon boucle ligne à ligne sur l'entrée standard (:digits N, :q)

pub mod etat;
pub mod vue;

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::{debug, info};

pub use etat::{AppCalc, Reglages};

/// Point d'entrée du front-end. Renvoie faux si une expression en argument a échoué.
pub fn lancer(reglages: Reglages) -> anyhow::Result<bool> {
    let mut app = AppCalc::depuis_reglages(&reglages);
    let stdout = io::stdout();
    let mut sortie = stdout.lock();

    if reglages.aide {
        writeln!(sortie, "{}", vue::USAGE)?;
        return Ok(true);
    }

    if !reglages.expressions.is_empty() {
        return evaluer_tout(&mut app, &reglages.expressions, &mut sortie);
    }

    let stdin = io::stdin();
    let invite = stdin.is_terminal();
    boucle(&mut app, stdin.lock(), &mut sortie, invite)?;
    Ok(true)
}

/// Évalue chaque expression dans l'ordre ; vrai si toutes ont réussi.
pub fn evaluer_tout<W: Write>(
    app: &mut AppCalc,
    expressions: &[String],
    sortie: &mut W,
) -> anyhow::Result<bool> {
    let mut tout_ok = true;
    for expr in expressions {
        tout_ok &= app.evaluer(expr);
        writeln!(sortie, "{}", app.rendu())?;
    }
    Ok(tout_ok)
}

/// Lecture ligne à ligne jusqu'à ":q" ou la fin de l'entrée.
pub fn boucle<R: BufRead, W: Write>(
    app: &mut AppCalc,
    entree: R,
    sortie: &mut W,
    invite: bool,
) -> anyhow::Result<()> {
    let mut lignes = entree.lines();
    loop {
        if invite {
            write!(sortie, "{}", vue::INVITE)?;
            sortie.flush()?;
        }

        let Some(ligne) = lignes.next() else {
            break;
        };
        let ligne = ligne?;
        let ligne = ligne.trim();

        if ligne.is_empty() {
            continue;
        }
        if ligne == ":q" {
            debug!("fin de session");
            break;
        }

        if let Some(reste) = ligne.strip_prefix(":digits") {
            match etat::lire_digits(reste) {
                Ok(n) => {
                    app.set_digits(n);
                    writeln!(sortie, "{}", app.rendu_digits())?;
                }
                Err(e) => writeln!(sortie, "erreur : {e}")?,
            }
            continue;
        }

        app.evaluer(ligne);
        writeln!(sortie, "{}", app.rendu())?;
    }

    info!(derniere = %app.entree, "session terminée");
    Ok(())
}
