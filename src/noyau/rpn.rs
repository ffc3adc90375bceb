// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> RPN (postfix) -> valeur
//
// Règles:
// - nombre / constante (e, π) : sortie directe
// - fonction : empilée, ressort juste après la parenthèse fermante de son argument
// - opérateur : dépile tant que la règle de comparaison l’exige
// - jeton inconnu : ignoré (il disparaît de la sortie)
//
// NOTE:
// - Aucune erreur ici. Parenthèses non appariées : dégradation silencieuse
//   (une '(' orpheline finit dans la sortie, l’évaluateur l’ignore).

use log::{debug, trace};
use num_traits::{Float, FloatConst};

use super::erreur::ErreurCalcul;
use super::jetons::{classer, Classe};
use super::table::{operateur, Associativite, CONSTANTE_E};

/// Vrai si `sommet` (haut de la pile) doit sortir avant d’empiler `entrant`.
///
/// - gauche : dépile si précédence(entrant) <= précédence(sommet)
/// - droite : dépile si précédence(entrant) <  précédence(sommet)
///
/// Faux si l’un des deux n’est pas un opérateur de la table.
pub fn doit_depiler(entrant: &str, sommet: &str) -> bool {
    let (Some(e), Some(s)) = (operateur(entrant), operateur(sommet)) else {
        return false;
    };

    let ecart = e.precedence - s.precedence;
    match e.assoc {
        Associativite::Gauche => ecart <= 0,
        Associativite::Droite => ecart < 0,
    }
}

/// Convertit une suite de jetons infixes en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: ["sin", "(", "π", "/", "2", ")"]
///   rpn:    ["π", "2", "/", "sin"]
pub fn convert_to_postfix<S: AsRef<str>>(jetons: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<&str> = Vec::new();

    for jeton in jetons.iter().map(AsRef::as_ref) {
        match classer(jeton) {
            Classe::Nombre | Classe::Constante => out.push(jeton.to_string()),

            Classe::Fonction | Classe::ParGauche => ops.push(jeton),

            Classe::Operateur => {
                // une fonction ou une '(' au sommet bloque (ce n’est pas un opérateur)
                while let Some(&sommet) = ops.last() {
                    if classer(sommet) != Classe::Operateur || !doit_depiler(jeton, sommet) {
                        break;
                    }
                    trace!("{jeton:?} fait sortir {sommet:?}");
                    out.push(sommet.to_string());
                    ops.pop();
                }
                ops.push(jeton);
            }

            Classe::ParDroite => {
                // dépile jusqu’à '(' (exclue)
                while let Some(&sommet) = ops.last() {
                    if sommet == "(" {
                        break;
                    }
                    out.push(sommet.to_string());
                    ops.pop();
                }

                // '(' trouvée : on la jette, puis la fonction éventuelle sort avec son argument
                if ops.pop().is_some() {
                    if let Some(&f) = ops.last() {
                        if classer(f) == Classe::Fonction {
                            out.push(f.to_string());
                            ops.pop();
                        }
                    }
                }
            }

            Classe::Inconnu => trace!("jeton inconnu ignoré: {jeton:?}"),
        }
    }

    // vide la pile ops (ordre de dépilement)
    while let Some(op) = ops.pop() {
        out.push(op.to_string());
    }

    out
}

/// Évalue une suite RPN.
///
/// - opérateur : dépile `b` (droite) puis `a` (gauche), empile `a OP b`
/// - fonction  : dépile `x`, empile `f(x)` (angles en radians)
/// - division par zéro : sémantique IEEE (inf / NaN), pas une erreur
/// - parenthèses / inconnus : ignorés (seule une conversion dégradée en produit)
///
/// La pile doit contenir exactement une valeur à la fin.
pub fn evaluate_postfix<F, S>(rpn: &[S]) -> Result<F, ErreurCalcul>
where
    F: Float + FloatConst,
    S: AsRef<str>,
{
    let mut st: Vec<F> = Vec::with_capacity(rpn.len());

    for (position, jeton) in rpn.iter().map(AsRef::as_ref).enumerate() {
        match classer(jeton) {
            Classe::Nombre => {
                let v = F::from_str_radix(jeton, 10)
                    .map_err(|_| ErreurCalcul::NombreInvalide(jeton.to_string()))?;
                st.push(v);
            }

            Classe::Constante => st.push(if jeton == CONSTANTE_E { F::E() } else { F::PI() }),

            Classe::Operateur => {
                let (a, b) = match (st.len(), st.pop(), st.pop()) {
                    (_, Some(b), Some(a)) => (a, b),
                    (disponibles, ..) => {
                        return Err(underflow(jeton, position, 2, disponibles));
                    }
                };
                st.push(applique_operateur(jeton, a, b));
            }

            Classe::Fonction => {
                let x = st
                    .pop()
                    .ok_or_else(|| underflow(jeton, position, 1, 0))?;
                st.push(applique_fonction(jeton, x));
            }

            Classe::ParGauche | Classe::ParDroite | Classe::Inconnu => {
                debug!("jeton {position} ignoré en RPN: {jeton:?}");
            }
        }
    }

    match st.len() {
        0 => Err(ErreurCalcul::PileVide),
        1 => st.pop().ok_or(ErreurCalcul::PileVide),
        restantes => Err(ErreurCalcul::OperandesExcedentaires { restantes }),
    }
}

fn underflow(jeton: &str, position: usize, requis: usize, disponibles: usize) -> ErreurCalcul {
    ErreurCalcul::Underflow {
        jeton: jeton.to_string(),
        position,
        requis,
        disponibles,
    }
}

fn applique_operateur<F: Float>(op: &str, a: F, b: F) -> F {
    match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => a / b,
        "^" => a.powf(b),
        _ => unreachable!("opérateur hors table: {op:?}"),
    }
}

fn applique_fonction<F: Float>(nom: &str, x: F) -> F {
    match nom {
        "sin" => x.sin(),
        "cos" => x.cos(),
        "tan" => x.tan(),
        "cot" => x.tan().recip(),
        "sec" => x.cos().recip(),
        "csc" => x.sin().recip(),
        "arcsin" => x.asin(),
        "arccos" => x.acos(),
        "arctan" => x.atan(),
        "ln" => x.ln(),
        "√" => x.sqrt(),
        _ => unreachable!("fonction hors table: {nom:?}"),
    }
}
