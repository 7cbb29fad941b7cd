// src/main.rs
//
// Calculatrice préfixe / infixe — point d’entrée TERMINAL
// --------------------------------------------------------
// Deux usages :
// - expressions en arguments :  calculatrice --mode infix "( 1 + ( 2 * 3 ) )"
//   (une expression qui commence par '-' passe aussi : calculatrice "- 3 2")
// - sinon, ligne par ligne sur l’entrée standard :
//     :mode infix        change de mode
//     ( 2 + 3 )          évalue et affiche le résultat (ou l’erreur)
//   Les lignes vides sont ignorées.
//
// Traces : RUST_LOG=debug pour voir les jetons et chaque résultat.
//
// Côté WEB (WASM), la calculatrice est exposée par src/web.rs ; ce binaire est vide.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    terminal::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};

    use anyhow::Context;
    use clap::Parser;

    use calculatrice_modes::{format_resultat, Calculatrice};

    /// Commande de changement de mode en lecture ligne par ligne.
    const COMMANDE_MODE: &str = ":mode";

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice", version, about = "Calculatrice préfixe / infixe parenthésée")]
    struct Options {
        /// Notation : prefix ou infix (vérifiée seulement à l’évaluation)
        #[arg(short, long, default_value = "prefix")]
        mode: String,

        /// Expressions à évaluer ; sans expression, lit l’entrée standard
        #[arg(allow_hyphen_values = true)]
        expressions: Vec<String>,
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

        let options = Options::parse();

        let mut calc = Calculatrice::new();
        calc.set_mode(options.mode);

        if options.expressions.is_empty() {
            return boucle(&mut calc);
        }

        let mut echecs = 0usize;
        for expr in &options.expressions {
            if !evaluer_et_afficher(&calc, expr)? {
                echecs += 1;
            }
        }

        if echecs > 0 {
            anyhow::bail!("{echecs} expression(s) en erreur");
        }
        Ok(())
    }

    /// Lecture ligne par ligne (une expression ou une commande par ligne).
    fn boucle(calc: &mut Calculatrice) -> anyhow::Result<()> {
        let stdin = io::stdin();

        for ligne in stdin.lock().lines() {
            let ligne = ligne.context("lecture de l’entrée standard")?;

            if ligne.trim().is_empty() {
                continue;
            }

            if let Some(reste) = ligne.trim_start().strip_prefix(COMMANDE_MODE) {
                calc.set_mode(reste.trim());
                let mut out = io::stdout().lock();
                match calc.mode() {
                    Ok(mode) => writeln!(out, "mode : {mode}")?,
                    Err(e) => writeln!(out, "mode : {} ({e})", calc.mode_demande())?,
                }
                continue;
            }

            evaluer_et_afficher(calc, &ligne)?;
        }

        Ok(())
    }

    /// Résultat sur stdout, erreur sur stderr. Retourne false si l’évaluation a échoué.
    fn evaluer_et_afficher(calc: &Calculatrice, entree: &str) -> anyhow::Result<bool> {
        match calc.evaluate(entree) {
            Ok(v) => {
                writeln!(io::stdout().lock(), "{}", format_resultat(v))
                    .context("écriture du résultat")?;
                Ok(true)
            }
            Err(e) => {
                writeln!(io::stderr().lock(), "erreur : {e}").context("écriture de l’erreur")?;
                Ok(false)
            }
        }
    }
}
