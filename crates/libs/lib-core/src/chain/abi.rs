//! Solidity bindings for the exchange and the ERC20 tokens.

use alloy_sol_types::sol;

sol! {
    /// The deployed stock exchange.
    #[derive(Debug, PartialEq, Eq)]
    interface IHoodsDex {
        function ethToToken(address tokenOut) external payable returns (uint256);
        function tokenToEth(address tokenIn, uint256 amountIn) external returns (uint256);
        function tokenToToken(address tokenIn, address tokenOut, uint256 amountIn) external;
    }

    /// The subset of ERC20 the swap flow needs.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20 {
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}
